use soroban_sdk::{Address, Env};

use crate::storage_types::{
    Campaign, CampaignId, DataKey, Error, TTL_INSTANCE, TTL_PERSISTENT,
};

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(e: &Env, key: &DataKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Token)
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
}

pub fn get_token(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn get_campaign_count(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::CampaignCount).unwrap_or(0)
}

pub fn set_campaign_count(e: &Env, count: u32) {
    e.storage().instance().set(&DataKey::CampaignCount, &count);
}

pub fn load_campaign(e: &Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
    e.storage()
        .persistent()
        .get(&DataKey::Campaign(campaign_id))
        .ok_or(Error::NotFound)
}

pub fn save_campaign(e: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.id);
    e.storage().persistent().set(&key, campaign);
    extend_persistent(e, &key);
}

pub fn get_contribution(e: &Env, campaign_id: CampaignId, contributor: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Contribution(campaign_id, contributor.clone()))
        .unwrap_or(0)
}

/// A zero amount drops the entry; reads of a missing entry yield zero.
pub fn set_contribution(e: &Env, campaign_id: CampaignId, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(campaign_id, contributor.clone());
    if amount == 0 {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, &amount);
        extend_persistent(e, &key);
    }
}

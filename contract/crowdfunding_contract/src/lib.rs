#![no_std]

mod campaign;
mod events;
mod storage;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use events::*;
pub use storage_types::{Campaign, CampaignId, CampaignStatus, Error, SECONDS_PER_DAY};

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Initialize the contract with the token that denominates goals and contributions
    pub fn initialize(env: Env, token: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        storage::set_token(&env, &token);
        storage::set_campaign_count(&env, 0);
        storage::extend_instance(&env);

        Ok(())
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        storage::get_token(&env)
    }

    /// Create a new campaign. Ids are zero-based and sequential.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        goal: i128,
        duration_in_days: u32,
    ) -> Result<CampaignId, Error> {
        creator.require_auth();
        if !storage::is_initialized(&env) {
            return Err(Error::NotInitialized);
        }

        campaign::validate_goal(goal)?;
        let deadline = utils::deadline_after_days(&env, duration_in_days)?;

        let campaign_id = storage::get_campaign_count(&env);
        let next_count = campaign_id.checked_add(1).ok_or(Error::Overflow)?;

        let record = Campaign {
            id: campaign_id,
            creator: creator.clone(),
            title,
            description,
            goal,
            deadline,
            amount_raised: 0,
            withdrawn: false,
            contributor_count: 0,
            total_refunded: 0,
            created_at: utils::get_current_timestamp(&env),
        };

        storage::save_campaign(&env, &record);
        storage::set_campaign_count(&env, next_count);
        storage::extend_instance(&env);

        log!(&env, "campaign created", campaign_id, deadline);

        events::emit_campaign_created(
            &env,
            CampaignCreatedEvent {
                campaign_id,
                creator,
                deadline,
            },
        );

        Ok(campaign_id)
    }

    /// Contribute `amount` to an open campaign
    pub fn contribute(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
        amount: i128,
    ) -> Result<(), Error> {
        contributor.require_auth();
        let token = storage::get_token(&env)?;

        let mut record = storage::load_campaign(&env, campaign_id)?;
        campaign::check_contribution(&env, &record, amount)?;

        let previous = storage::get_contribution(&env, campaign_id, &contributor);
        let balance = campaign::record_contribution(&mut record, previous, amount)?;

        campaign::collect_contribution(&env, &token, &contributor, amount);

        storage::set_contribution(&env, campaign_id, &contributor, balance);
        storage::save_campaign(&env, &record);

        log!(&env, "contribution accepted", campaign_id, amount);

        events::emit_contribution_made(
            &env,
            ContributionMadeEvent {
                campaign_id,
                contributor,
                amount,
            },
        );

        Ok(())
    }

    /// Creator withdraws the full raised amount once the deadline passed with the goal met
    pub fn withdraw_funds(env: Env, campaign_id: CampaignId, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        let token = storage::get_token(&env)?;

        let mut record = storage::load_campaign(&env, campaign_id)?;
        campaign::check_withdrawal(&env, &record, &caller)?;

        let amount = record.amount_raised;
        record.withdrawn = true;
        storage::save_campaign(&env, &record);

        campaign::pay_out(&env, &token, &record.creator, amount);

        log!(&env, "funds withdrawn", campaign_id, amount);

        events::emit_funds_withdrawn(
            &env,
            FundsWithdrawnEvent {
                campaign_id,
                creator: record.creator,
                amount,
            },
        );

        Ok(amount)
    }

    /// Contributor reclaims their full stake from a campaign that missed its goal
    pub fn refund(env: Env, campaign_id: CampaignId, contributor: Address) -> Result<i128, Error> {
        contributor.require_auth();
        let token = storage::get_token(&env)?;

        let mut record = storage::load_campaign(&env, campaign_id)?;
        let amount = storage::get_contribution(&env, campaign_id, &contributor);
        campaign::check_refund(&env, &record, amount)?;

        campaign::record_refund(&mut record, amount)?;
        storage::set_contribution(&env, campaign_id, &contributor, 0);
        storage::save_campaign(&env, &record);

        campaign::pay_out(&env, &token, &contributor, amount);

        log!(&env, "refund issued", campaign_id, amount);

        events::emit_refund_issued(
            &env,
            RefundIssuedEvent {
                campaign_id,
                contributor,
                amount,
            },
        );

        Ok(amount)
    }

    /// View functions
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
        storage::load_campaign(&env, campaign_id)
    }

    pub fn get_contribution(env: Env, campaign_id: CampaignId, contributor: Address) -> i128 {
        storage::get_contribution(&env, campaign_id, &contributor)
    }

    pub fn get_contributor_count(env: Env, campaign_id: CampaignId) -> Result<u32, Error> {
        Ok(storage::load_campaign(&env, campaign_id)?.contributor_count)
    }

    pub fn get_campaign_count(env: Env) -> u32 {
        storage::get_campaign_count(&env)
    }

    /// All campaigns in creation order
    pub fn get_all_campaigns(env: Env) -> Result<Vec<Campaign>, Error> {
        let mut campaigns = Vec::new(&env);
        for campaign_id in 0..storage::get_campaign_count(&env) {
            campaigns.push_back(storage::load_campaign(&env, campaign_id)?);
        }
        Ok(campaigns)
    }

    pub fn get_campaign_status(env: Env, campaign_id: CampaignId) -> Result<CampaignStatus, Error> {
        let record = storage::load_campaign(&env, campaign_id)?;
        Ok(campaign::status(&env, &record))
    }

    pub fn is_deadline_passed(env: Env, campaign_id: CampaignId) -> Result<bool, Error> {
        let record = storage::load_campaign(&env, campaign_id)?;
        Ok(utils::is_reached(&env, record.deadline))
    }

    pub fn is_goal_reached(env: Env, campaign_id: CampaignId) -> Result<bool, Error> {
        let record = storage::load_campaign(&env, campaign_id)?;
        Ok(campaign::is_goal_reached(&record))
    }

    /// Seconds until the deadline, zero once it has passed
    pub fn time_left(env: Env, campaign_id: CampaignId) -> Result<u64, Error> {
        let record = storage::load_campaign(&env, campaign_id)?;
        Ok(utils::seconds_until(&env, record.deadline))
    }
}

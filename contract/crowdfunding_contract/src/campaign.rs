use soroban_sdk::{token, Address, Env};

use crate::storage_types::*;
use crate::utils;

/// Move `amount` of the configured token from `from` into the contract
pub fn collect_contribution(env: &Env, token_address: &Address, from: &Address, amount: i128) {
    let token_client = token::TokenClient::new(env, token_address);

    token_client.transfer(from, &env.current_contract_address(), &amount);
}

/// Move `amount` of the configured token out of the contract to `to`
pub fn pay_out(env: &Env, token_address: &Address, to: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }

    let token_client = token::TokenClient::new(env, token_address);

    token_client.transfer(&env.current_contract_address(), to, &amount);
}

pub fn is_goal_reached(campaign: &Campaign) -> bool {
    campaign.amount_raised >= campaign.goal
}

pub fn status(env: &Env, campaign: &Campaign) -> CampaignStatus {
    if !utils::is_reached(env, campaign.deadline) {
        CampaignStatus::Open
    } else if campaign.withdrawn {
        CampaignStatus::Settled
    } else if is_goal_reached(campaign) {
        CampaignStatus::Succeeded
    } else {
        CampaignStatus::Failed
    }
}

pub fn validate_goal(goal: i128) -> Result<(), Error> {
    if goal < 0 {
        return Err(Error::InvalidGoal);
    }
    Ok(())
}

pub fn check_contribution(env: &Env, campaign: &Campaign, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    if utils::is_reached(env, campaign.deadline) {
        return Err(Error::CampaignEnded);
    }
    Ok(())
}

/// Order matters: each failure is reported before the ones below it.
pub fn check_withdrawal(env: &Env, campaign: &Campaign, caller: &Address) -> Result<(), Error> {
    if *caller != campaign.creator {
        return Err(Error::NotCreator);
    }
    if !utils::is_reached(env, campaign.deadline) {
        return Err(Error::CampaignOngoing);
    }
    if !is_goal_reached(campaign) {
        return Err(Error::GoalNotReached);
    }
    if campaign.withdrawn {
        return Err(Error::AlreadyWithdrawn);
    }
    Ok(())
}

pub fn check_refund(env: &Env, campaign: &Campaign, contributed: i128) -> Result<(), Error> {
    if !utils::is_reached(env, campaign.deadline) {
        return Err(Error::CampaignOngoing);
    }
    if is_goal_reached(campaign) {
        return Err(Error::GoalReached);
    }
    if contributed <= 0 {
        return Err(Error::NoContribution);
    }
    Ok(())
}

/// Apply an accepted contribution to the record. Returns the contributor's new balance.
pub fn record_contribution(
    campaign: &mut Campaign,
    previous: i128,
    amount: i128,
) -> Result<i128, Error> {
    let balance = previous.checked_add(amount).ok_or(Error::Overflow)?;
    campaign.amount_raised = campaign
        .amount_raised
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    if previous == 0 {
        campaign.contributor_count = campaign
            .contributor_count
            .checked_add(1)
            .ok_or(Error::Overflow)?;
    }

    Ok(balance)
}

/// Remove a refunded stake from the record totals.
pub fn record_refund(campaign: &mut Campaign, amount: i128) -> Result<(), Error> {
    campaign.amount_raised = campaign
        .amount_raised
        .checked_sub(amount)
        .ok_or(Error::Overflow)?;
    campaign.total_refunded = campaign
        .total_refunded
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    Ok(())
}

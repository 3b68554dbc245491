use soroban_sdk::{contracterror, contracttype, Address, String};

pub type CampaignId = u32;

// Storage keys
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Token,
    CampaignCount,
    Campaign(CampaignId),
    Contribution(CampaignId, Address), // (CampaignID, Contributor) -> amount
}

// Derived from ledger time and totals, never stored
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Open,
    Succeeded,
    Settled,
    Failed,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub goal: i128,
    pub deadline: u64,
    pub amount_raised: i128,
    pub withdrawn: bool,
    pub contributor_count: u32,
    pub total_refunded: i128,
    pub created_at: u64,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotFound = 3,
    InvalidAmount = 4,
    CampaignEnded = 5,
    NotCreator = 6,
    CampaignOngoing = 7,
    GoalNotReached = 8,
    AlreadyWithdrawn = 9,
    GoalReached = 10,
    NoContribution = 11,
    InvalidGoal = 12,
    InvalidDuration = 13,
    Overflow = 14,
}

// Constants
pub const SECONDS_PER_DAY: u64 = 86400;
pub const LEDGERS_PER_DAY: u32 = 17280;
pub const TTL_INSTANCE: u32 = LEDGERS_PER_DAY * 30; // 30 days
pub const TTL_PERSISTENT: u32 = LEDGERS_PER_DAY * 90; // 90 days

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleOpened {
    pub owner: Address,
    pub beneficiary: Address,
    pub payment_token: Address,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionAccepted {
    pub contributor: Address,
    pub requested: i128,
    pub accepted: i128,
    pub refunded: i128,
    pub total_contributed: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleEnded {
    pub by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleExtended {
    pub by: Address,
    pub additional_seconds: u64,
    pub end_time: u64,
}

pub fn emit_sale_opened(
    env: &Env,
    owner: Address,
    beneficiary: Address,
    payment_token: Address,
    end_time: u64,
) {
    let topics = (symbol_short!("opened"),);
    let data = SaleOpened {
        owner,
        beneficiary,
        payment_token,
        end_time,
    };
    env.events().publish(topics, data);
}

pub fn emit_contribution(
    env: &Env,
    contributor: Address,
    requested: i128,
    accepted: i128,
    refunded: i128,
    total_contributed: i128,
) {
    let topics = (symbol_short!("contrib"), contributor.clone());
    let data = ContributionAccepted {
        contributor,
        requested,
        accepted,
        refunded,
        total_contributed,
    };
    env.events().publish(topics, data);
}

pub fn emit_sale_ended(env: &Env, by: Address) {
    let topics = (symbol_short!("ended"),);
    env.events().publish(topics, SaleEnded { by });
}

pub fn emit_sale_extended(env: &Env, by: Address, additional_seconds: u64, end_time: u64) {
    let topics = (symbol_short!("extended"),);
    let data = SaleExtended {
        by,
        additional_seconds,
        end_time,
    };
    env.events().publish(topics, data);
}

//! Deploy FundMe to Casper livenet/testnet using Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000
//!
//! Optional:
//!   FUND_ME_PRICE_FEED=hash-...   existing CSPR/USD feed; when unset a
//!                                 MockV3Aggregator is deployed first

use std::str::FromStr;

use odra::host::{Deployer, HostRef};
use odra::prelude::*;

use fund_me_contracts::fund_me::{FundMe, FundMeInitArgs};
use fund_me_contracts::mock_aggregator::{MockV3Aggregator, MockV3AggregatorInitArgs};

/// Mock feed decimals
const MOCK_DECIMALS: u8 = 8;

/// Mock feed answer: 2000 USD per CSPR
const MOCK_INITIAL_ANSWER: i64 = 2_000_00000000;

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== FundMe Livenet Deployment ===");
    println!();

    // Initialize Odra livenet environment
    let env = odra_casper_livenet_env::env();

    // Configure payment amount for deployments/calls (required for Casper 2.0 txs)
    let payment_amount: u64 = std::env::var("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(200_000_000_000);
    env.set_gas(payment_amount);

    // Get deployer address (becomes the FundMe owner)
    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!();

    // ==================== Phase 1: Price Feed ====================
    println!("=== Phase 1: Price Feed ===");
    println!();

    let configured_feed = match std::env::var("FUND_ME_PRICE_FEED") {
        Ok(value) => match Address::from_str(value.trim()) {
            Ok(address) => Some(address),
            Err(_) => {
                eprintln!("FUND_ME_PRICE_FEED is not a valid address: {}", value);
                std::process::exit(1);
            }
        },
        Err(_) => None,
    };

    let price_feed = match configured_feed {
        Some(address) => {
            println!("Using configured price feed: {:?}", address);
            address
        }
        None => {
            println!("FUND_ME_PRICE_FEED not set, deploying MockV3Aggregator...");
            let feed = MockV3Aggregator::deploy(
                &env,
                MockV3AggregatorInitArgs {
                    decimals: MOCK_DECIMALS,
                    initial_answer: MOCK_INITIAL_ANSWER,
                },
            );
            let feed_addr = feed.address().clone();
            println!("MockV3Aggregator deployed at: {:?}", feed_addr);
            feed_addr
        }
    };

    println!();

    // ==================== Phase 2: FundMe ====================
    println!("=== Phase 2: FundMe ===");
    println!();

    println!("Deploying FundMe...");
    let fund_me = FundMe::deploy(&env, FundMeInitArgs { price_feed });
    println!("FundMe deployed at: {:?}", fund_me.address().clone());

    println!();
    println!("=== Deployment Complete ===");
    println!();
    println!("Contract Addresses:");
    println!("  PriceFeed:  {:?}", price_feed);
    println!("  FundMe:     {:?}", fund_me.address().clone());
    println!("  Owner:      {:?}", fund_me.get_owner());
    println!("  Min USD:    {}", fund_me.get_minimum_usd());
}

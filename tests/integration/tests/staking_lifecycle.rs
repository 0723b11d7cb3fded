//! Scenario tests for the staking vault
//!
//! End-to-end flows driven through the instruction handlers with the
//! harness World: stake/cooldown/redeem lifecycles, the slashing and
//! fund-return protocol, reward accrual and claims, and agreement with
//! the pure safety model.

use palisade_common::StakingError;
use palisade_integration_tests::*;
use palisade_staking::cooldown::CooldownPhase;
use palisade_staking::math::{self, EXCHANGE_RATE_UNIT};
use solana_program_test::tokio;

const ALICE: Pubkey = [0x01; 32];
const BOB: Pubkey = [0x02; 32];
const OUTSIDER: Pubkey = [0xEE; 32];

#[tokio::test]
async fn test_full_stake_cooldown_redeem_lifecycle() {
    println!("========================================");
    println!("Lifecycle: stake -> cooldown -> redeem");
    println!("========================================");

    let mut world = World::new();

    world.stake(ALICE, 500).unwrap();
    assert_eq!(world.balance_of(&ALICE), 500);
    assert_eq!(world.phase_of(&ALICE), CooldownPhase::Idle);

    // Redemption before any cooldown is rejected
    let err = world.redeem(ALICE, 100).unwrap_err();
    assert_eq!(err, StakingError::CooldownNotActive);

    world.warp_to(10);
    world.activate_cooldown(ALICE).unwrap();
    assert_eq!(world.phase_of(&ALICE), CooldownPhase::Cooling);

    // Exactly at cooldown end: still cooling
    world.warp_to(1_010);
    let err = world.redeem(ALICE, 100).unwrap_err();
    assert_eq!(err, StakingError::InsufficientCooldown);

    // One second later the window opens
    world.warp_to(1_011);
    assert_eq!(world.phase_of(&ALICE), CooldownPhase::Redeemable);
    let receipt = world.redeem(ALICE, 200).unwrap();
    assert_eq!(receipt.shares_burned, 200);
    assert_eq!(receipt.assets_released, 200);

    // Past the window the stale timestamp no longer helps
    world.warp_to(1_211);
    assert_eq!(world.phase_of(&ALICE), CooldownPhase::Expired);
    let err = world.redeem(ALICE, 100).unwrap_err();
    assert_eq!(err, StakingError::UnstakeWindowClosed);

    // A fresh cooldown and a full exit
    world.activate_cooldown(ALICE).unwrap();
    world.warp_to(1_211 + 1_001);
    let receipt = world.redeem(ALICE, u64::MAX).unwrap();
    assert_eq!(receipt.shares_burned, 300);
    assert_eq!(world.balance_of(&ALICE), 0);
    assert_eq!(world.stakers[&ALICE].cooldown_timestamp, 0);
    assert!(world.is_solvent());
    // Staking and redeeming alone never move the rate
    assert_eq!(world.vault.exchange_rate, EXCHANGE_RATE_UNIT);

    println!("✅ lifecycle complete");
}

#[tokio::test]
async fn test_slashing_devalues_shares_and_relaxes_exit() {
    println!("========================================");
    println!("Slashing: cap, rate, relaxed redemption");
    println!("========================================");

    let mut world = World::new();
    world.stake(ALICE, 100).unwrap();

    // Requested 10 is under the 50% cap: taken in full
    let receipt = world.slash(SLASHING_ADMIN, 10).unwrap();
    assert_eq!(receipt.amount_slashed, 10);
    assert!(world.vault.post_slashing);
    assert_eq!(world.vault.asset_pool, 90);

    // 100 shares over 90 assets, rounded up against the staker
    let expected_rate = (100u128 * EXCHANGE_RATE_UNIT) / 90 + 1;
    assert_eq!(world.vault.exchange_rate, expected_rate);
    assert_eq!(
        math::preview_redeem(100, world.vault.exchange_rate).unwrap(),
        89
    );

    // Staking is paused during the post-slashing period
    let err = world.stake(BOB, 50).unwrap_err();
    assert_eq!(err, StakingError::SlashingInProgress);

    // But exits skip the cooldown gates entirely
    let receipt = world.redeem(ALICE, u64::MAX).unwrap();
    assert_eq!(receipt.shares_burned, 100);
    assert_eq!(receipt.assets_released, 89);
    // Rounding dust stays behind in the pool
    assert_eq!(world.vault.asset_pool, 1);
    assert!(world.is_solvent());

    println!("✅ slash accounting verified");
}

#[tokio::test]
async fn test_one_unsettled_slash_at_a_time() {
    println!("========================================");
    println!("Slashing: settle before slashing again");
    println!("========================================");

    let mut world = World::new();
    world.stake(ALICE, 1_000).unwrap();

    world.slash(SLASHING_ADMIN, 100).unwrap();
    let err = world.slash(SLASHING_ADMIN, 100).unwrap_err();
    assert_eq!(err, StakingError::SlashingInProgress);

    world.settle_slashing(SLASHING_ADMIN).unwrap();
    assert!(!world.vault.post_slashing);
    assert!(world.slash(SLASHING_ADMIN, 100).is_ok());

    // And only the slashing admin can drive any of it
    world.settle_slashing(SLASHING_ADMIN).unwrap();
    assert_eq!(
        world.slash(OUTSIDER, 1).unwrap_err(),
        StakingError::Unauthorized
    );
    assert_eq!(
        world.settle_slashing(OUTSIDER).unwrap_err(),
        StakingError::Unauthorized
    );

    println!("✅ slash gating verified");
}

#[tokio::test]
async fn test_return_funds_restores_share_value() {
    println!("========================================");
    println!("Fund return: insurance refund flow");
    println!("========================================");

    let mut world = World::new();
    world.stake(ALICE, 100).unwrap();
    world.slash(SLASHING_ADMIN, 10).unwrap();
    world.settle_slashing(SLASHING_ADMIN).unwrap();

    // Anyone may refund; the backing was 89 after the slash
    let receipt = world.return_funds(10).unwrap();
    assert_eq!(receipt.amount_returned, 10);
    assert_eq!(world.vault.asset_pool, 100);

    // 100 shares over 99 assets: above par, rounded up
    assert!(world.vault.exchange_rate > EXCHANGE_RATE_UNIT);
    assert_eq!(
        math::preview_redeem(100, world.vault.exchange_rate).unwrap(),
        98
    );
    assert!(world.is_solvent());

    println!("✅ fund return verified");
}

#[tokio::test]
async fn test_rewards_accrue_proportionally_and_claim() {
    println!("========================================");
    println!("Rewards: time-weighted accrual and claims");
    println!("========================================");

    // 10 units of reward asset emitted per second over the staked supply
    let mut world = World::with_emission(10);

    world.stake(ALICE, 300).unwrap();
    world.warp_to(100);
    world.stake(BOB, 100).unwrap();

    world.warp_to(200);

    // Alice held 300/300 for 100s, then 300/400 for 100s
    let claim = world.claim_rewards(ALICE, u64::MAX).unwrap();
    assert_eq!(claim.amount_claimed, 1_749); // 1_000 + 750, less index dust
    assert_eq!(world.stakers[&ALICE].rewards_to_claim, 0);

    // Bob held 100/400 for 100s
    let claim = world.claim_rewards(BOB, u64::MAX).unwrap();
    assert_eq!(claim.amount_claimed, 250);

    // A partial claim leaves the remainder committed
    world.warp_to(300);
    let claim = world.claim_rewards(ALICE, 100).unwrap();
    assert_eq!(claim.amount_claimed, 100);
    let leftover = world.stakers[&ALICE].rewards_to_claim;
    assert!(leftover > 0);
    let claim = world.claim_rewards(ALICE, u64::MAX).unwrap();
    assert_eq!(claim.amount_claimed, leftover);

    println!("✅ reward accounting verified");
}

#[tokio::test]
async fn test_claim_and_restake_compounds() {
    println!("========================================");
    println!("Rewards: claim-and-restake compounding");
    println!("========================================");

    let mut world = World::with_emission(10);
    world.stake(ALICE, 1_000).unwrap();

    world.warp_to(100);
    let receipt = world.claim_rewards_and_stake(ALICE, u64::MAX).unwrap();
    assert_eq!(receipt.amount_claimed, 1_000);
    assert_eq!(receipt.shares_minted, 1_000);
    assert_eq!(world.balance_of(&ALICE), 2_000);
    // Restaked rewards land in the pool without an external pull
    assert_eq!(world.vault.asset_pool, 2_000);

    // Nothing left to restake immediately afterwards
    let err = world.claim_rewards_and_stake(ALICE, u64::MAX).unwrap_err();
    assert_eq!(err, StakingError::InvalidAmount);

    println!("✅ compounding verified");
}

#[tokio::test]
async fn test_claim_and_redeem_combined() {
    println!("========================================");
    println!("Rewards: combined claim + redeem");
    println!("========================================");

    let mut world = World::with_emission(10);
    world.stake(ALICE, 1_000).unwrap();
    world.warp_to(10);
    world.activate_cooldown(ALICE).unwrap();

    world.warp_to(1_050);
    let (claim, redeem) = world.claim_rewards_and_redeem(ALICE, u64::MAX, 400).unwrap();
    assert_eq!(claim.amount_claimed, 10_500); // 1_050s * 10/s
    assert_eq!(redeem.shares_burned, 400);
    assert_eq!(world.balance_of(&ALICE), 600);

    println!("✅ combined flow verified");
}

#[tokio::test]
async fn test_on_behalf_operations_require_claim_helper() {
    println!("========================================");
    println!("Authorization: claim-helper gating");
    println!("========================================");

    let mut world = World::with_emission(10);
    world.stake(ALICE, 1_000).unwrap();
    world.warp_to(10);
    world.activate_cooldown(ALICE).unwrap();
    world.warp_to(1_050);

    // A non-helper caller is rejected before anything else runs
    let err = world.redeem_on_behalf(OUTSIDER, ALICE, 100).unwrap_err();
    assert_eq!(err, StakingError::Unauthorized);
    let err = world
        .claim_rewards_on_behalf(OUTSIDER, ALICE, u64::MAX)
        .unwrap_err();
    assert_eq!(err, StakingError::Unauthorized);
    assert_eq!(world.balance_of(&ALICE), 1_000);

    // The registered helper succeeds, still subject to cooldown rules
    let receipt = world.redeem_on_behalf(CLAIM_HELPER, ALICE, 100).unwrap();
    assert_eq!(receipt.shares_burned, 100);
    let claim = world
        .claim_rewards_on_behalf(CLAIM_HELPER, ALICE, u64::MAX)
        .unwrap();
    assert!(claim.amount_claimed > 0);

    // Outside the window even the helper is bound by the state machine
    world.warp_to(5_000);
    let err = world.redeem_on_behalf(CLAIM_HELPER, ALICE, 100).unwrap_err();
    assert_eq!(err, StakingError::UnstakeWindowClosed);

    println!("✅ role gating verified");
}

#[tokio::test]
async fn test_split_stakes_merge_like_combined_stake() {
    println!("========================================");
    println!("Cooldown: split-stake merge equivalence");
    println!("========================================");

    let mut split = World::new();
    split.stake(ALICE, 1_000).unwrap();
    split.warp_to(50);
    split.activate_cooldown(ALICE).unwrap();
    split.warp_to(500);
    split.stake(ALICE, 300).unwrap();
    split.stake(ALICE, 200).unwrap();

    let mut combined = World::new();
    combined.stake(ALICE, 1_000).unwrap();
    combined.warp_to(50);
    combined.activate_cooldown(ALICE).unwrap();
    combined.warp_to(500);
    combined.stake(ALICE, 500).unwrap();

    let split_ts = split.stakers[&ALICE].cooldown_timestamp;
    let combined_ts = combined.stakers[&ALICE].cooldown_timestamp;
    println!("split={}, combined={}", split_ts, combined_ts);
    assert!(split_ts.abs_diff(combined_ts) <= 2);

    println!("✅ merge equivalence verified");
}

#[tokio::test]
async fn test_cooldown_reconfiguration() {
    println!("========================================");
    println!("Config: cooldown duration and slash cap");
    println!("========================================");

    let mut world = World::new();
    world.stake(ALICE, 100).unwrap();

    assert_eq!(
        world.set_cooldown_seconds(OUTSIDER, 100).unwrap_err(),
        StakingError::Unauthorized
    );
    world.set_cooldown_seconds(COOLDOWN_ADMIN, 100).unwrap();

    world.warp_to(1);
    world.activate_cooldown(ALICE).unwrap();
    world.warp_to(102);
    assert!(world.redeem(ALICE, 10).is_ok());

    assert_eq!(
        world.set_max_slashable(SLASHING_ADMIN, 10_000).unwrap_err(),
        StakingError::InvalidPercentage
    );
    world.set_max_slashable(SLASHING_ADMIN, 9_999).unwrap();
    assert_eq!(world.vault.max_slashable_bps, 9_999);

    println!("✅ reconfiguration verified");
}

#[tokio::test]
async fn test_program_agrees_with_safety_model() {
    println!("========================================");
    println!("Model: program vs pure safety model");
    println!("========================================");

    let mut world = World::new();

    let mut model = model_safety::State::default();
    model.params.max_slashable_bps = 5_000;
    model.params.cooldown_seconds = 1_000;
    model.params.unstake_window = 200;
    let _ = model.stakers.try_push(model_safety::Staker::default());

    // Same sequence through both: stake, slash, partial refund, exit
    world.stake(ALICE, 1_000).unwrap();
    model = model_safety::stake(model, 0, 1_000, 0);

    world.slash(SLASHING_ADMIN, 200).unwrap();
    model = model_safety::slash(model, 200);

    world.return_funds(50).unwrap();
    model = model_safety::return_funds(model, 50);

    // Post-slashing exits bypass the gates in both
    world.redeem(ALICE, 400).unwrap();
    model = model_safety::redeem(model, 0, 400);

    assert_eq!(world.vault.exchange_rate, model.exchange_rate);
    assert_eq!(world.vault.asset_pool, model.pool);
    assert_eq!(world.vault.total_shares, model.total_shares);
    assert!(model_safety::invariants_hold(&model));
    assert!(world.is_solvent());

    println!("✅ model agreement verified");
}

//! # Harvest Flow Verification
//!
//! End-to-end runs of the runtime against a small in-memory world:
//!
//! 1. **Debounce**: duplicate notifications within the window are dropped
//! 2. **Deferred effects**: nothing changes until the next tick
//! 3. **Reset**: harvested crops go back to stage zero and cannot be
//!    harvested again until they regrow
//!
//! Run with: cargo test -p harvest --test harvest_flow_test -- --nocapture

use std::collections::HashMap;

use harvest::{
    BlockPos, BlockSnapshot, BlockState, DropResult, Enchantments, HarvestConfig, HarvestRuntime,
    HeldItem, InteractionEvent, InteractionOutcome, ItemStack, PlayerId, Skip, WorldMutation,
};
use harvest_economy::ScriptedRng;

/// Minimal world: block table plus dropped item totals.
#[derive(Default)]
struct ToyWorld {
    blocks: HashMap<BlockPos, (String, BlockState)>,
    dropped: HashMap<String, u32>,
}

impl ToyWorld {
    fn plant(&mut self, pos: BlockPos, block_id: &str, state: BlockState) {
        self.blocks.insert(pos, (block_id.to_string(), state));
    }

    fn interact(
        &self,
        player: PlayerId,
        pos: BlockPos,
        item: Option<HeldItem>,
    ) -> InteractionEvent {
        let (block_id, state) = self
            .blocks
            .get(&pos)
            .cloned()
            .unwrap_or_else(|| ("minecraft:air".to_string(), BlockState::new()));
        InteractionEvent {
            player,
            block: BlockSnapshot::new(pos, &block_id, state),
            item,
        }
    }

    fn dropped(&self, item_id: &str) -> u32 {
        self.dropped.get(item_id).copied().unwrap_or(0)
    }
}

impl WorldMutation for ToyWorld {
    fn spawn_item(&mut self, stack: &ItemStack, _at: BlockPos) {
        *self.dropped.entry(stack.item_id.clone()).or_insert(0) += stack.amount;
    }

    fn set_block_state(&mut self, at: BlockPos, block_id: &str, state: &BlockState) {
        self.blocks.insert(at, (block_id.to_string(), state.clone()));
    }
}

fn fortune_hoe(level: u32) -> HeldItem {
    HeldItem::enchanted("minecraft:netherite_hoe", Enchantments::new().with("fortune", level))
}

fn shipped_config() -> HarvestConfig {
    HarvestConfig::load(concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/harvest.toml")).unwrap()
}

#[test]
fn verify_shipped_config_is_vanilla() {
    assert_eq!(shipped_config(), HarvestConfig::default());
}

#[test]
fn verify_debounce_contract() {
    let mut runtime = HarvestRuntime::seeded(shipped_config(), 11).unwrap();
    let world = ToyWorld::default();
    let p = PlayerId(1);

    let a = world.interact(p, BlockPos::new(1, 2, 3), None);
    let b = world.interact(p, BlockPos::new(4, 5, 6), None);

    assert_ne!(runtime.on_interaction(&a), InteractionOutcome::Suppressed);
    assert_eq!(runtime.on_interaction(&a), InteractionOutcome::Suppressed);
    assert_ne!(runtime.on_interaction(&b), InteractionOutcome::Suppressed);
    assert_ne!(runtime.on_interaction(&a), InteractionOutcome::Suppressed);
}

#[test]
fn verify_wheat_harvest_end_to_end() {
    let mut runtime =
        HarvestRuntime::new(shipped_config(), ScriptedRng::hits_then_misses(2, 1)).unwrap();
    let mut world = ToyWorld::default();
    let pos = BlockPos::new(0, 64, 0);
    world.plant(pos, "minecraft:wheat", BlockState::new().with("growth", 7));

    let outcome = runtime.on_interaction(&world.interact(PlayerId(1), pos, None));
    assert_eq!(outcome, InteractionOutcome::Scheduled(DropResult { secondary: 2, primary: 1 }));

    // Immediate context: the world is untouched.
    assert_eq!(world.dropped("minecraft:wheat"), 0);
    assert_eq!(world.blocks[&pos].1.get_int("growth"), Some(7));

    runtime.tick(&mut world);

    assert_eq!(world.dropped("minecraft:wheat_seeds"), 2);
    assert_eq!(world.dropped("minecraft:wheat"), 1);
    assert_eq!(world.blocks[&pos].1.get_int("growth"), Some(0));

    // Once the debounce entry is gone, the reset crop is no longer ripe.
    runtime.tick(&mut world);
    let again = runtime.on_interaction(&world.interact(PlayerId(1), pos, None));
    assert_eq!(again, InteractionOutcome::Ignored(Skip::NotMature));
}

#[test]
fn verify_root_vegetable_floor_with_fortune() {
    let mut runtime =
        HarvestRuntime::new(shipped_config(), ScriptedRng::hits_then_misses(0, 1)).unwrap();
    let mut world = ToyWorld::default();
    let pos = BlockPos::new(8, 70, 8);
    world.plant(pos, "minecraft:carrots", BlockState::new().with("growth", 7));

    let outcome = runtime.on_interaction(&world.interact(PlayerId(2), pos, Some(fortune_hoe(2))));
    assert_eq!(outcome, InteractionOutcome::Scheduled(DropResult { secondary: 0, primary: 1 }));

    runtime.tick(&mut world);
    assert_eq!(world.dropped("minecraft:carrot"), 1);
}

#[test]
fn verify_cocoa_keeps_facing() {
    let mut runtime = HarvestRuntime::seeded(shipped_config(), 3).unwrap();
    let mut world = ToyWorld::default();
    let pos = BlockPos::new(-5, 80, 12);
    world.plant(pos, "minecraft:cocoa", BlockState::new().with("age", 2).with("direction", 1));

    runtime.on_interaction(&world.interact(PlayerId(1), pos, Some(fortune_hoe(3))));
    runtime.tick(&mut world);

    assert_eq!(world.dropped("minecraft:cocoa_beans"), 2);
    let (block_id, state) = &world.blocks[&pos];
    assert_eq!(block_id, "minecraft:cocoa");
    assert_eq!(state, &BlockState::new().with("age", 0).with("direction", 1));
}

#[test]
fn verify_reset_uses_state_seen_at_interaction() {
    let mut runtime = HarvestRuntime::seeded(shipped_config(), 4).unwrap();
    let mut world = ToyWorld::default();
    let pos = BlockPos::new(3, 70, 3);
    world.plant(pos, "minecraft:cocoa", BlockState::new().with("age", 2).with("direction", 1));

    runtime.on_interaction(&world.interact(PlayerId(1), pos, None));
    // Host rotates the pod between the interaction and the tick.
    world.plant(pos, "minecraft:cocoa", BlockState::new().with("age", 2).with("direction", 2));
    runtime.tick(&mut world);

    assert_eq!(world.blocks[&pos].1, BlockState::new().with("age", 0).with("direction", 1));
}

#[test]
fn verify_unripe_and_unknown_blocks_are_untouched() {
    let mut runtime = HarvestRuntime::seeded(shipped_config(), 5).unwrap();
    let mut world = ToyWorld::default();
    let young = BlockPos::new(1, 64, 1);
    let stone = BlockPos::new(2, 64, 1);
    world.plant(young, "minecraft:potatoes", BlockState::new().with("growth", 4));
    world.plant(stone, "minecraft:stone", BlockState::new());

    assert_eq!(
        runtime.on_interaction(&world.interact(PlayerId(1), young, None)),
        InteractionOutcome::Ignored(Skip::NotMature)
    );
    assert_eq!(
        runtime.on_interaction(&world.interact(PlayerId(1), stone, None)),
        InteractionOutcome::Ignored(Skip::NotACrop)
    );

    let report = runtime.tick(&mut world);
    assert_eq!(report.effects_applied, 0);
    assert!(world.dropped.is_empty());
    assert_eq!(world.blocks[&young].1.get_int("growth"), Some(4));
}

#[test]
fn verify_many_players_one_tick() {
    let mut runtime = HarvestRuntime::seeded(shipped_config(), 17).unwrap();
    let mut world = ToyWorld::default();

    for i in 0..10 {
        let pos = BlockPos::new(i, 64, 0);
        world.plant(pos, "minecraft:nether_wart", BlockState::new().with("age", 3));
        let outcome = runtime.on_interaction(&world.interact(PlayerId(i as u64), pos, None));
        assert!(matches!(
            outcome,
            InteractionOutcome::Scheduled(d) if (1..=3).contains(&d.primary)
        ));
    }

    let report = runtime.tick(&mut world);
    assert_eq!(report.harvests_applied, 10);
    assert_eq!(report.expiries_scheduled, 10);
    let total = world.dropped("minecraft:nether_wart");
    assert!((10..=30).contains(&total), "dropped {total}");

    let report = runtime.tick(&mut world);
    assert_eq!(report.expired, 10);
    assert!(runtime.debouncer().is_empty());
}

#[test]
fn verify_longer_expiry_window() {
    let config = HarvestConfig::from_toml_str("expiry_delay_ticks = 3").unwrap();
    let mut runtime = HarvestRuntime::seeded(config, 23).unwrap();
    let mut world = ToyWorld::default();
    let ev = world.interact(PlayerId(9), BlockPos::new(0, 0, 0), None);

    runtime.on_interaction(&ev);
    for _ in 0..3 {
        runtime.tick(&mut world);
        assert_eq!(runtime.on_interaction(&ev), InteractionOutcome::Suppressed);
    }
    runtime.tick(&mut world);
    assert_ne!(runtime.on_interaction(&ev), InteractionOutcome::Suppressed);
}

#[test]
fn verify_sweep_interval() {
    let config = HarvestConfig::from_toml_str("sweep_interval_ticks = 2").unwrap();
    let mut runtime = HarvestRuntime::seeded(config, 29).unwrap();
    let mut world = ToyWorld::default();
    let ev = world.interact(PlayerId(4), BlockPos::new(7, 7, 7), None);

    assert_eq!(runtime.on_interaction(&ev), InteractionOutcome::Ignored(Skip::NotACrop));
    assert_eq!(runtime.current_tick(), 0);

    // (tick, expiries scheduled, entries expired, entries left)
    let expected = [(1, 0, 0, 1), (2, 1, 0, 1), (3, 0, 1, 0), (4, 0, 0, 0)];
    for (tick, scheduled, expired, left) in expected {
        let report = runtime.tick(&mut world);
        assert_eq!(runtime.current_tick(), tick);
        assert_eq!(report.tick, tick);
        assert_eq!(report.expiries_scheduled, scheduled, "tick {tick}");
        assert_eq!(report.expired, expired, "tick {tick}");
        assert_eq!(runtime.debouncer().len(), left, "tick {tick}");
    }

    assert_ne!(runtime.on_interaction(&ev), InteractionOutcome::Suppressed);
}

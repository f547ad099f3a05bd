//! Save, load, and sync behavior across plinth instances.

mod common;

use std::env;
use std::fs;

use common::{world_with_pyramid, MapResolver};
use plinth_world::{
    BlockPos, ItemRegistry, ObserverId, Plinth, PlinthConfig, PlinthRecord, DEFAULT_PODIUM_ITEM,
    SCAN_INTERVAL_TICKS,
};

const ANCHOR: BlockPos = BlockPos { x: 8, y: 70, z: -3 };

fn temp_path(name: &str) -> std::path::PathBuf {
    env::temp_dir().join(format!("plinth_world_{}_{}", std::process::id(), name))
}

#[test]
fn saved_state_survives_a_reload() {
    let registry = ItemRegistry::new();
    let mut plinth = Plinth::new("overworld", ANCHOR, PlinthConfig::default(), &registry);
    plinth.on_interact(ObserverId(1), None, false, &registry).unwrap();
    plinth.on_interact(ObserverId(2), None, false, &registry).unwrap();

    let mut world = world_with_pyramid(ANCHOR, 3);
    world.set_time(SCAN_INTERVAL_TICKS);
    let mut resolver = MapResolver::default();
    plinth.tick(&world, &mut resolver).unwrap();

    let path = temp_path("reload.json");
    plinth.save_to_path(&path).unwrap();

    let mut restored = Plinth::new("overworld", ANCHOR, PlinthConfig::default(), &registry);
    restored.load_from_path(&path, &registry).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(restored.level(), 3);
    assert_eq!(restored.selected_item(), DEFAULT_PODIUM_ITEM);
    assert!(restored.state().bindings.contains(ObserverId(1)));
    assert!(restored.state().bindings.contains(ObserverId(2)));
    assert_eq!(restored.to_record(), plinth.to_record());
}

#[test]
fn record_with_unknown_item_loads_with_the_default() {
    let registry = ItemRegistry::new();
    let json = r#"{
  "level": 2,
  "podiumItem": "someone_elses_mod:relic",
  "boundPlayers": ["0000000000000000000000000000002a"]
}"#;
    let record = PlinthRecord::from_json(json).unwrap();

    let mut plinth = Plinth::new("overworld", ANCHOR, PlinthConfig::default(), &registry);
    plinth.apply_record(&record, &registry).unwrap();
    assert_eq!(plinth.level(), 2);
    assert_eq!(plinth.selected_item(), DEFAULT_PODIUM_ITEM);
    assert!(plinth.state().bindings.contains(ObserverId(42)));
}

#[test]
fn sync_payload_reproduces_state_on_a_replica() {
    let registry = ItemRegistry::new();
    let mut source = Plinth::new("overworld", ANCHOR, PlinthConfig::default(), &registry);
    source.on_interact(ObserverId(9), None, false, &registry).unwrap();

    let mut world = world_with_pyramid(ANCHOR, 2);
    world.set_time(SCAN_INTERVAL_TICKS);
    let mut resolver = MapResolver::default();
    source.tick(&world, &mut resolver).unwrap();

    let payload = source.sync_payload().unwrap();
    let mut replica = Plinth::new("overworld", ANCHOR, PlinthConfig::default(), &registry);
    replica.apply_sync_payload(&payload, &registry).unwrap();

    assert_eq!(replica.level(), 2);
    assert_eq!(replica.to_record(), source.to_record());
}

#[test]
fn sync_hash_flags_redundant_sends() {
    let registry = ItemRegistry::new();
    let mut plinth = Plinth::new("overworld", ANCHOR, PlinthConfig::default(), &registry);
    let before = plinth.sync_hash().unwrap();
    assert_eq!(plinth.sync_hash().unwrap(), before);

    plinth.on_interact(ObserverId(4), None, false, &registry).unwrap();
    assert_ne!(plinth.sync_hash().unwrap(), before);
}

#[test]
fn config_file_round_trip() {
    let path = temp_path("config.toml");
    fs::write(&path, "base_reach = 24\n").unwrap();
    let config = PlinthConfig::load_toml(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(config.base_reach, 24);
}

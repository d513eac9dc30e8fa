//! Integration tests: hand-built scenarios run through `World::simulate`.

mod common;

use anosmellya_core::{FluidKind, Species, Vec2};
use anosmellya_engine::{Animal, Config, World};

use common::{census, empty_world, inert, place, quiet_config};

// ── Reproduction ────────────────────────────────────────────────────

#[test]
fn receptive_occupant_becomes_mother() {
    let mut world = empty_world(8, 8);
    place(&mut world, 2, 2, inert(Species::Herbivore, 120.0, Vec2::new(0.6, 0.0)));
    place(&mut world, 3, 2, inert(Species::Herbivore, 150.0, Vec2::ZERO));
    world.simulate();

    assert_eq!(world.last_metrics().births, 1);
    // The occupant is receptive, so the search starts east of (3, 2).
    let kid = world.animals().at(4, 2);
    assert!(kid.is_present);
    assert_eq!(kid.species(), Species::Herbivore);
    assert_eq!(kid.food, 40.0);
    assert_eq!(kid.age, 0, "a child born ahead of the scan is skipped once");
    assert_eq!(kid.pos, Vec2::new(4.5, 2.5));

    // Mother paid for the child, then ticked.
    assert_eq!(world.animals().at(3, 2).food, 150.0 - 40.0 - 1.0);
    // The mover bounced back to its own tile.
    assert!(world.animals().at(2, 2).is_present);
    assert_eq!(census(&world).len(), 3);
}

#[test]
fn child_takes_mothers_species() {
    let mut world = empty_world(8, 8);
    place(&mut world, 5, 5, inert(Species::Carnivore, 120.0, Vec2::new(0.0, 0.6)));
    place(&mut world, 5, 6, inert(Species::Carnivore, 150.0, Vec2::ZERO));
    world.simulate();
    assert_eq!(world.last_metrics().births, 1);
    let kid = world.animals().at(6, 6);
    assert!(kid.is_present && kid.is_carn);
}

#[test]
fn unreceptive_pair_has_no_child() {
    let mut world = empty_world(8, 8);
    place(&mut world, 2, 2, inert(Species::Herbivore, 50.0, Vec2::new(0.6, 0.0)));
    place(&mut world, 3, 2, inert(Species::Herbivore, 50.0, Vec2::ZERO));
    world.simulate();
    assert_eq!(world.last_metrics().births, 0);
    assert_eq!(census(&world).len(), 2);
}

#[test]
fn surrounded_mother_has_no_child() {
    let mut world = empty_world(8, 8);
    place(&mut world, 2, 3, inert(Species::Herbivore, 120.0, Vec2::new(0.6, 0.0)));
    place(&mut world, 3, 3, inert(Species::Herbivore, 150.0, Vec2::ZERO));
    // East, north and south of the mother; west is the mover.
    for (x, y) in [(4, 3), (3, 2), (3, 4)] {
        place(&mut world, x, y, inert(Species::Herbivore, 10.0, Vec2::ZERO));
    }
    world.simulate();
    assert_eq!(world.last_metrics().births, 0);
    assert_eq!(census(&world).len(), 5);
}

#[test]
fn child_food_never_drives_mother_negative() {
    let mut world = empty_world(8, 8);
    // The mover is the receptive parent with exactly its threshold left
    // after the tick's food cost, and wants to give more than it has.
    let mut mover = inert(Species::Herbivore, 101.0, Vec2::new(0.6, 0.0));
    mover.baby_food = 500.0;
    place(&mut world, 2, 2, mover);
    place(&mut world, 3, 2, inert(Species::Herbivore, 10.0, Vec2::ZERO));
    world.simulate();

    assert_eq!(world.last_metrics().births, 1);
    let mother = world.animals().at(2, 2);
    assert!(mother.is_present);
    assert_eq!(mother.food, 0.0);
    // East of the mother is the occupant, so the child goes north.
    let kid = world.animals().at(2, 1);
    assert_eq!(kid.food, 100.0);
}

// ── Predation ───────────────────────────────────────────────────────

#[test]
fn fleeing_herbivore_feeds_carnivore() {
    let config = Config {
        carn_eat_portion: 0.25,
        carn_efficiency: 0.5,
        ..quiet_config()
    };
    let mut world = World::new(8, 8, 1, config, 1).unwrap();
    // The herbivore runs into the carnivore; the carnivore still eats.
    place(&mut world, 1, 1, inert(Species::Herbivore, 81.0, Vec2::new(0.6, 0.0)));
    place(&mut world, 2, 1, inert(Species::Carnivore, 11.0, Vec2::ZERO));
    world.simulate();

    assert_eq!(world.last_metrics().attacks, 1);
    let herb = world.animals().at(1, 1);
    let carn = world.animals().at(2, 1);
    assert_eq!(herb.food, 80.0 - 20.0);
    assert_eq!(carn.food, 11.0 + 10.0 - 1.0);
}

// ── Death ───────────────────────────────────────────────────────────

#[test]
fn animals_die_at_lifespan() {
    let config = Config {
        lifespan: 3.0,
        ..quiet_config()
    };
    let mut world = World::new(4, 4, 1, config, 1).unwrap();
    place(&mut world, 1, 1, inert(Species::Herbivore, 50.0, Vec2::ZERO));
    world.simulate();
    world.simulate();
    assert!(world.animals().at(1, 1).is_present);
    world.simulate();
    assert!(!world.animals().at(1, 1).is_present);
    assert_eq!(world.last_metrics().deaths, 1);
}

#[test]
fn animals_die_when_food_runs_out() {
    let mut world = empty_world(4, 4);
    place(&mut world, 1, 1, inert(Species::Carnivore, 1.5, Vec2::ZERO));
    world.simulate();
    assert!(world.animals().at(1, 1).is_present);
    world.simulate();
    assert!(!world.animals().at(1, 1).is_present);
}

#[test]
fn vacated_and_dead_slots_carry_no_genetics() {
    let mut world = empty_world(6, 6);
    let mut wanderer = Animal::herbivore();
    wanderer.vel = Vec2::new(1.0, 0.0);
    wanderer.vel_aff = Default::default();
    place(&mut world, 1, 1, wanderer);
    let mut doomed = Animal::carnivore();
    doomed.food = 0.5;
    place(&mut world, 4, 4, doomed);
    world.simulate();
    assert_eq!(*world.animals().at(4, 4), Animal::default());
    assert_eq!(*world.animals().at(1, 1), Animal::default());
}

// ── Fields ──────────────────────────────────────────────────────────

#[test]
fn empty_world_accumulates_placed_plants() {
    let config = Config {
        plant_place_chance: 0.01,
        plant_place_amount: 10.0,
        plant_evap: 0.0,
        ..quiet_config()
    };
    let (width, height, ticks) = (64u32, 64u32, 200u32);
    let mut world = World::new(width, height, 77, config.clone(), 1).unwrap();
    let mut placements = 0u64;
    for _ in 0..ticks {
        world.simulate();
        placements += world.last_metrics().plant_placements as u64;
    }
    let expected = ticks as f64
        * (width * height) as f64
        * config.plant_place_chance as f64
        * config.plant_place_amount as f64;
    let total = world.statistics().plant_total;
    assert!(
        (total - expected).abs() < expected * 0.02,
        "total {total} vs expected {expected}"
    );
    // Dispersal moves plant around but never loses it.
    let placed = placements as f64 * config.plant_place_amount as f64;
    assert!((total - placed).abs() < placed * 1e-3, "{total} vs {placed}");
}

#[test]
fn scent_fields_decay_without_animals() {
    let mut world = empty_world(10, 10);
    *world.field_mut(FluidKind::Herb).at_mut(5, 5) = 100.0;
    *world.field_mut(FluidKind::Baby).at_mut(5, 5) = 100.0;
    for _ in 0..20 {
        world.simulate();
    }
    let stats = world.statistics();
    assert!(stats.herb_total < 100.0 && stats.herb_total > 90.0);
    assert!(stats.baby_total < stats.herb_total, "baby evaporates faster");
}

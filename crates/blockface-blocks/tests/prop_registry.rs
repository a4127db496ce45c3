use blockface_blocks::config::{BlockDef, BlocksConfig};
use blockface_blocks::{
    Block, BlockCatalog, BlockState, Connections, Direction, Facing, Half, Shape,
};
use proptest::prelude::*;

fn catalog() -> BlockCatalog {
    BlockCatalog::builtin().expect("builtin catalog")
}

#[test]
fn builtin_catalog_assigns_ids_in_order() {
    let cat = catalog();
    assert_eq!(cat.id_by_name("air"), Some(0));
    assert_eq!(cat.id_by_name("stone"), Some(1));
    assert_eq!(cat.get(0).map(|t| t.shape), Some(Shape::None));
    let fence = cat.id_by_name("oak_fence").unwrap();
    assert_eq!(cat.get(fence).map(|t| t.shape), Some(Shape::Fence));
}

#[test]
fn only_cubes_default_to_opaque() {
    let cat = catalog();
    for ty in cat.blocks.iter().filter(|t| !t.name.is_empty()) {
        assert_eq!(ty.opaque, ty.shape == Shape::Cube, "{}", ty.name);
    }
    let stone = cat.get(cat.id_by_name("stone").unwrap()).unwrap();
    assert_eq!(stone.full_sides, [[0b11_1111; 4]; 2]);
    for dir in Direction::ALL {
        assert!(stone.covers_side(BlockState::default(), dir));
    }
}

fn solid_catalog() -> BlockCatalog {
    BlockCatalog::from_toml_str(
        r#"
        [[blocks]]
        name = "air"
        shape = "none"

        [[blocks]]
        name = "solid_slab"
        shape = "slab"
        opaque = true

        [[blocks]]
        name = "solid_stairs"
        shape = "stairs"
        opaque = true

        [[blocks]]
        name = "solid_ramp"
        shape = "ramp"
        opaque = true
    "#,
    )
    .unwrap()
}

#[test]
fn opaque_slab_covers_the_side_its_half_sits_on() {
    let cat = solid_catalog();
    let slab = cat.get(cat.id_by_name("solid_slab").unwrap()).unwrap();
    assert!(slab.opaque);
    let bottom = BlockState::default().with_half(Half::Bottom);
    let top = BlockState::default().with_half(Half::Top);
    assert!(slab.covers_side(bottom, Direction::NegY));
    assert!(!slab.covers_side(bottom, Direction::PosY));
    assert!(slab.covers_side(top, Direction::PosY));
    assert!(!slab.covers_side(top, Direction::NegY));
    for dir in [Direction::PosX, Direction::NegX, Direction::PosZ, Direction::NegZ] {
        assert!(!slab.covers_side(bottom, dir));
        assert!(!slab.covers_side(top, dir));
    }
}

#[test]
fn opaque_stairs_cover_only_the_back_of_their_facing() {
    let cat = solid_catalog();
    let stairs = cat.get(cat.id_by_name("solid_stairs").unwrap()).unwrap();
    for facing in Facing::ALL {
        let state = BlockState::default().with_facing(facing);
        let back = facing.direction();
        assert!(stairs.covers_side(state, back), "{facing:?}");
        assert!(stairs.covers_side(state, Direction::NegY), "{facing:?}");
        for other in Facing::ALL.into_iter().filter(|f| *f != facing) {
            assert!(
                !stairs.covers_side(state, other.direction()),
                "{facing:?} claims {other:?}"
            );
        }
    }
    let east = Block::with_state(
        cat.id_by_name("solid_stairs").unwrap(),
        BlockState::default().with_facing(Facing::East),
    );
    assert!(!cat.covers_side(east, Direction::NegZ));
    assert!(cat.covers_side(east, Direction::PosX));
}

#[test]
fn opaque_ramp_mask_follows_half_and_facing() {
    let cat = solid_catalog();
    let id = cat.id_by_name("solid_ramp").unwrap();
    let ramp = cat.get(id).unwrap();
    for half in [Half::Bottom, Half::Top] {
        let floor = match half {
            Half::Bottom => Direction::NegY,
            Half::Top => Direction::PosY,
        };
        for facing in Facing::ALL {
            let state = BlockState::new(half, facing);
            assert!(ramp.covers_side(state, floor), "{half:?} {facing:?}");
            assert!(!ramp.covers_side(state, floor.opposite()), "{half:?} {facing:?}");
            for other in Facing::ALL.into_iter().filter(|f| *f != facing) {
                assert!(!ramp.covers_side(state, other.direction()));
            }
        }
    }
    assert!(!cat.covers_side(Block::AIR, Direction::PosY));
}

#[test]
fn explicit_ids_leave_gaps_unresolvable() {
    let cfg = BlocksConfig {
        blocks: vec![
            BlockDef {
                name: "air".into(),
                id: None,
                shape: Some("none".into()),
                opaque: None,
            },
            BlockDef {
                name: "marble".into(),
                id: Some(5),
                shape: None,
                opaque: None,
            },
        ],
    };
    let cat = BlockCatalog::from_config(cfg).unwrap();
    assert_eq!(cat.blocks.len(), 6);
    assert!(cat.get(3).is_none());
    assert_eq!(cat.get(5).map(|t| t.name.as_str()), Some("marble"));
    assert_eq!(cat.blocks[3].id, 3);
    assert!(cat.faces(Block::new(3), Direction::PosY, Connections::NONE).is_empty());
}

#[test]
fn config_errors_are_reported() {
    let unknown_shape = BlockCatalog::from_toml_str(
        r#"
        [[blocks]]
        name = "weird"
        id = 1
        shape = "torus"
    "#,
    );
    assert!(unknown_shape.is_err());

    let dup = BlockCatalog::from_toml_str(
        r#"
        [[blocks]]
        name = "air"
        shape = "none"
        [[blocks]]
        name = "stone"
        [[blocks]]
        name = "stone"
    "#,
    );
    assert!(dup.is_err());

    let air_slot = BlockCatalog::from_toml_str(
        r#"
        [[blocks]]
        name = "stone"
    "#,
    );
    assert!(air_slot.is_err());

    assert!(BlockCatalog::from_toml_str("blocks = 3").is_err());
}

#[test]
fn fence_connects_to_fences_and_opaque_blocks_only() {
    let cat = catalog();
    let stone = cat.make_block("stone", BlockState::default()).unwrap();
    let fence = cat.make_block("oak_fence", BlockState::default()).unwrap();
    let slab = cat.make_block("stone_slab", BlockState::default()).unwrap();
    assert!(cat.connects_to(Shape::Fence, stone));
    assert!(cat.connects_to(Shape::Fence, fence));
    assert!(!cat.connects_to(Shape::Fence, slab));
    assert!(!cat.connects_to(Shape::Fence, Block::AIR));
    assert!(!cat.connects_to(Shape::Fence, Block::new(999)));
}

#[test]
fn lone_fence_emits_only_its_post() {
    let cat = catalog();
    let fence = cat.make_block("oak_fence", BlockState::default()).unwrap();
    let total: usize = Direction::ALL
        .iter()
        .map(|&d| cat.faces(fence, d, Connections::NONE).len())
        .sum();
    assert_eq!(total, cat.templates().fence_post().len());
}

#[test]
fn slab_half_selects_template() {
    let cat = catalog();
    let bottom = cat
        .make_block("stone_slab", BlockState::default().with_half(Half::Bottom))
        .unwrap();
    let top = cat
        .make_block("stone_slab", BlockState::default().with_half(Half::Top))
        .unwrap();
    let b_top = cat.faces(bottom, Direction::PosY, Connections::NONE);
    let t_top = cat.faces(top, Direction::PosY, Connections::NONE);
    assert_eq!(b_top.len(), 1);
    assert!(!b_top[0].lies_on(Direction::PosY));
    assert!(t_top[0].covers_side(Direction::PosY));
    let t_bottom = cat.faces(top, Direction::NegY, Connections::NONE);
    assert!(!t_bottom[0].lies_on(Direction::NegY));
}

fn arb_state() -> impl Strategy<Value = BlockState> {
    (any::<bool>(), 0usize..4).prop_map(|(top, f)| {
        BlockState::new(if top { Half::Top } else { Half::Bottom }, Facing::ALL[f])
    })
}

proptest! {
    // Catalog lookups are pure: repeated calls agree exactly
    #[test]
    fn faces_are_pure(id in 0u16..8, state in arb_state(), dir_ix in 0usize..6, conn_bits in 0u8..16) {
        let cat = catalog();
        let mut conn = Connections::NONE;
        for f in Facing::ALL {
            if conn_bits & (1 << f.index()) != 0 {
                conn = conn.with(f);
            }
        }
        let b = Block::with_state(id, state);
        let dir = Direction::from_index(dir_ix);
        let a = cat.faces(b, dir, conn);
        let c = cat.faces(b, dir, conn);
        prop_assert_eq!(a, c);
    }

    // Every emitted face winds toward the direction it is listed under
    #[test]
    fn faces_wind_outward(id in 0u16..7, state in arb_state(), dir_ix in 0usize..6) {
        let cat = catalog();
        let dir = Direction::from_index(dir_ix);
        let all = Connections::NONE
            .with(Facing::North)
            .with(Facing::East)
            .with(Facing::South)
            .with(Facing::West);
        for f in cat.faces(Block::with_state(id, state), dir, all) {
            prop_assert!(f.winding_normal().dot(dir.normal()) > 0.0);
            prop_assert!(f.corners().len() >= 3);
        }
    }
}

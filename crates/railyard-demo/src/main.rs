//! Scripted walk through cart placement, lookup, coupling and item hand-off.
//!
//! Run with: `cargo run -p railyard-demo -- --log-level debug`

use clap::Parser;
use railyard_carts::{
    CartFilter, CartKind, ItemRegistry, ItemStack, LinkTable, LinkageManager, LinkageService,
    OwnerIdentity, TrackDetector, TrackSet, cart_owner, carts_in, carts_on_all_sides,
    create_world, is_cart_on_any_side, linked_carts, name_uuid, offer_or_drop_item, place_cart,
};
use railyard_config::{CliArgs, Config, default_config_dir};
use railyard_math::BlockPos;
use tracing::{error, info, warn};

/// Length of the demo track, laid along +X.
const TRACK_LENGTH: i32 = 4;

fn main() {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone().map_or_else(default_config_dir, Ok) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to resolve config directory: {e}");
            std::process::exit(1);
        }
    };
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config from {}: {e}", config_dir.display());
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&args);
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    railyard_log::init_logging(Some(config_dir.as_path()), cfg!(debug_assertions), Some(&config));
    info!(
        "Railyard demo | sensitivity={} drop_offset={} remote={}",
        config.carts.spawn_search_sensitivity, config.carts.drop_offset_y, config.carts.remote
    );

    let mut world = create_world(&config.carts);
    let rails: Vec<BlockPos> = (0..TRACK_LENGTH).map(|x| BlockPos::new(x, 64, 0)).collect();
    world.insert_resource(TrackDetector::new(rails.iter().copied().collect::<TrackSet>()));

    let owner = OwnerIdentity::new("alice", name_uuid("alice"));
    let items = ["minecart", "chest_minecart", "hopper_minecart", "tnt_minecart"];
    let mut train = Vec::new();
    for (pos, name) in rails.iter().zip(items) {
        let Some(item) = world.resource::<ItemRegistry>().lookup_by_name(name) else {
            warn!("Item {name} is not registered");
            continue;
        };
        let stack = ItemStack::new(item, 1);
        match place_cart(&mut world, &owner, Some(&stack), *pos) {
            Some(cart) => {
                info!("Placed {name} at {pos} as {cart:?}");
                train.push(cart);
            }
            None => warn!("Nothing placed for {name} at {pos}"),
        }
    }

    // Off the track nothing is placed.
    let off_track = BlockPos::new(0, 64, 5);
    if let Some(item) = world.resource::<ItemRegistry>().lookup_by_name("minecart") {
        let placed = place_cart(&mut world, &owner, Some(&ItemStack::new(item, 1)), off_track);
        info!("Placement off track at {off_track}: {placed:?}");
    }

    let mut links = LinkTable::new();
    for pair in train.windows(2) {
        links.create_link(pair[0], pair[1]);
    }
    world.insert_resource(LinkageService::new(links));

    for &cart in &train {
        match cart_owner(&world, cart) {
            Ok(owner) => {
                let linked = linked_carts(&world, cart);
                info!("{cart:?} owned by {owner}, linked to {linked:?}");
            }
            Err(e) => error!("{cart:?}: {e}"),
        }
    }

    let center = BlockPos::new(1, 64, 0);
    let neighbours = carts_on_all_sides(&world, center, config.carts.spawn_search_sensitivity);
    info!("Carts around {center}: {neighbours:?}");
    let containers = CartFilter::of_kind(CartKind::Container);
    info!(
        "Container next to {center}: {}",
        is_cart_on_any_side(&world, center, 0.1, containers)
    );
    let all = carts_in(&world, BlockPos::new(-1, 63, -1), BlockPos::new(TRACK_LENGTH + 1, 66, 2));
    info!("{} carts on the line", all.len());

    // No transfer service is installed, so the whole stack lands on the ground.
    if let Some(&first) = train.first() {
        let stack = ItemStack::new(railyard_carts::ItemId(0), 8);
        if let Some(dropped) = offer_or_drop_item(&mut world, first, stack) {
            info!("Refused items dropped as {dropped:?}");
        }
    }
}

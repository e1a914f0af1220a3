//! Canlab demo host.
//!
//! Stands in for the real render shell: binds the slot registry from the
//! model's exported node names, then drives a scripted recolor session
//! through the configurator and logs the directives a renderer would apply.

use canlab::interaction::Configurator;
use canlab::motion::idle_pose;
use canlab::registry::SlotRegistry;
use canlab::theme::{Color, ThemeCatalog};

/// Node names as exported by the headphone asset, grouping nodes included.
const MODEL_PART_MANIFEST: &[&str] = &[
    "headphones",
    "body",
    "usbSocket",
    "socketSecond",
    "socketFirst",
    "bandLower",
    "caps",
    "rings",
    "rodLower",
    "rodUpper",
    "screws",
    "bandUpper",
    "drivers",
    "gridLower",
    "speakers",
    "driverLeft",
    "driverRight",
    "gridUpper",
    "holder",
    "pads",
    "headband",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("canlab - headphone configurator demo session");

    // Binding errors are fatal: a model missing a colorable part must not
    // start with that part silently skipped.
    let registry = SlotRegistry::bind(MODEL_PART_MANIFEST)?;
    let catalog = ThemeCatalog::builtin();
    log::info!("themes available: {}", catalog.theme_names().join(", "));

    let mut configurator = Configurator::new(catalog.default_theme());

    // Hover the headband; the host would swap the cursor here.
    let headband = registry.resolve("headband")?;
    configurator.pointer_over(headband);
    log::info!("cursor request: {:?}", configurator.cursor_request());

    // Enter edit mode and recolor the headband.
    configurator.set_edit_mode(true);
    configurator.pointer_down(headband);
    log::info!("picker seeded with {}", configurator.picker_color().to_hex());
    configurator.color_picked(Color::from_hex("#123456")?);

    // Switch palettes; the override resets with the theme.
    if let Some(nature) = catalog.get("nature") {
        configurator.theme_changed(nature);
    }

    for (slot, style) in configurator.styles() {
        log::info!(
            "{:<13} color {} opacity {:.1}",
            slot.name(),
            style.color.to_hex(),
            style.opacity
        );
    }

    // A few frames of the idle sway the host would apply to the model root.
    for frame in 0..3 {
        let t = frame as f32 / 60.0;
        let pose = idle_pose(t);
        log::debug!(
            "t={:.3}s rotation {:?} translation {:?}",
            t,
            pose.rotation,
            pose.translation
        );
    }

    log::info!("session complete");
    Ok(())
}

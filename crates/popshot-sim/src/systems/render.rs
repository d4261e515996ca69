//! Render requests: clear, then one draw call per entity.

use popshot_core::config::SimConfig;
use popshot_core::render::RenderSurface;
use popshot_core::types::Position;

use crate::store::EntityStore;

/// Issue draw requests for the current store contents.
/// Targets first, then projectiles, each in store order.
pub fn run(store: &EntityStore, config: &SimConfig, surface: &mut dyn RenderSurface) {
    surface.clear();

    for target in store.targets() {
        surface.fill_circle(target.position, target.radius, config.target.color);
    }

    let style = &config.projectile;
    for projectile in store.projectiles() {
        let origin = Position::new(projectile.position.x - style.width / 2.0, projectile.position.y);
        surface.fill_rect(origin, style.width, style.height, style.color);
    }
}

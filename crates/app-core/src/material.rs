use crate::ports::{MaterialId, RenderEngine};
use crate::rig::CameraRig;
use std::rc::Rc;

/// A named color choice offered by the customizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaterialVariant {
    pub name: &'static str,
    /// 0xRRGGBB
    pub color: u32,
}

/// Recolors one material that was resolved by name at setup.
///
/// If resolution failed the switch is a permanent no-op: clicks neither fault
/// nor mark the scene dirty, and nothing is looked up again later.
pub struct MaterialSwitch {
    material: Option<MaterialId>,
    engine: Rc<dyn RenderEngine>,
    rig: Rc<CameraRig>,
}

impl MaterialSwitch {
    pub fn resolve(name: &str, engine: Rc<dyn RenderEngine>, rig: Rc<CameraRig>) -> Self {
        let material = engine.find_material(name);
        match material {
            Some(id) => log::info!("[material] resolved '{}' as {:?}", name, id),
            None => log::warn!("[material] '{}' not found; color switching disabled", name),
        }
        Self {
            material,
            engine,
            rig,
        }
    }

    /// Returns whether the color was applied.
    pub fn apply(&self, color: u32) -> bool {
        let Some(id) = self.material else {
            log::debug!("[material] unresolved; #{:06x} ignored", color);
            return false;
        };
        self.engine.set_material_color(id, color);
        self.rig.mark_scene_dirty();
        true
    }
}

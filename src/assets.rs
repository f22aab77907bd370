//! Optional decorative images
//!
//! Every asset is independent and best-effort. A slot stays empty when its
//! load fails, and the renderer draws a placeholder shape instead. Nothing
//! here ever blocks the game from starting.

use serde::{Deserialize, Serialize};

/// The images the game knows how to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Background,
    CarPlayer,
    CarAi,
    ObstacleAnimal,
    ObstacleRock,
    FinishLine,
}

impl AssetKind {
    pub const ALL: [AssetKind; 6] = [
        AssetKind::Background,
        AssetKind::CarPlayer,
        AssetKind::CarAi,
        AssetKind::ObstacleAnimal,
        AssetKind::ObstacleRock,
        AssetKind::FinishLine,
    ];

    /// URL the image is served from
    pub fn path(self) -> &'static str {
        match self {
            AssetKind::Background => "/assets/generated/jungle-bg.dim_1600x900.png",
            AssetKind::CarPlayer => "/assets/generated/car-player-yellow.dim_128x128.png",
            AssetKind::CarAi => "/assets/generated/car-ai-grey.dim_128x128.png",
            AssetKind::ObstacleAnimal => "/assets/generated/obstacle-animal.dim_128x128.png",
            AssetKind::ObstacleRock => "/assets/generated/obstacle-rock.dim_128x128.png",
            AssetKind::FinishLine => "/assets/generated/finish-line.dim_512x128.png",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One optional slot per [`AssetKind`]
#[derive(Debug, Clone)]
pub struct Assets<T> {
    slots: [Option<T>; 6],
}

impl<T> Default for Assets<T> {
    fn default() -> Self {
        Self {
            slots: Default::default(),
        }
    }
}

impl<T> Assets<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: AssetKind) -> Option<&T> {
        self.slots[kind.index()].as_ref()
    }

    pub fn has(&self, kind: AssetKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Record the outcome of one load. Failures are logged and leave the
    /// slot empty.
    pub fn record<E: std::fmt::Display>(&mut self, kind: AssetKind, result: Result<T, E>) {
        match result {
            Ok(asset) => {
                log::debug!("Loaded {:?}", kind);
                self.slots[kind.index()] = Some(asset);
            }
            Err(e) => {
                log::warn!("Failed to load image {}: {}", kind.path(), e);
                self.slots[kind.index()] = None;
            }
        }
    }

    pub fn loaded(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Browser image loading
#[cfg(target_arch = "wasm32")]
pub mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlImageElement;

    use super::{AssetKind, Assets};

    pub type ImageAssets = Rc<RefCell<Assets<HtmlImageElement>>>;

    /// Resolve when the image loads, reject when it fails
    async fn load_image(src: &str) -> Result<HtmlImageElement, String> {
        let img = HtmlImageElement::new().map_err(|e| format!("{:?}", e))?;
        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            img.set_onload(Some(&resolve));
            img.set_onerror(Some(&reject));
        });
        img.set_src(src);
        let result = JsFuture::from(promise).await;
        img.set_onload(None);
        img.set_onerror(None);
        result.map(|_| img).map_err(|_| "load error".to_string())
    }

    /// Kick off every load in parallel. Slots fill in as images arrive;
    /// the caller does not wait.
    pub fn spawn_loads(assets: &ImageAssets) {
        for kind in AssetKind::ALL {
            let assets = assets.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = load_image(kind.path()).await;
                assets.borrow_mut().record(kind, result);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_load_leaves_slot_empty() {
        let mut assets: Assets<u32> = Assets::new();
        assets.record(AssetKind::CarPlayer, Ok::<_, String>(7));
        assets.record(AssetKind::Background, Err("404"));

        assert_eq!(assets.get(AssetKind::CarPlayer), Some(&7));
        assert!(!assets.has(AssetKind::Background));
        assert_eq!(assets.loaded(), 1);
    }

    #[test]
    fn test_kinds_have_distinct_slots() {
        let mut assets: Assets<AssetKind> = Assets::new();
        for kind in AssetKind::ALL {
            assets.record(kind, Ok::<_, String>(kind));
        }
        for kind in AssetKind::ALL {
            assert_eq!(assets.get(kind), Some(&kind));
        }
        assert_eq!(assets.loaded(), AssetKind::ALL.len());
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = AssetKind::ALL.iter().map(|k| k.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 6);
    }
}

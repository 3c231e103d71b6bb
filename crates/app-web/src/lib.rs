#![cfg(target_arch = "wasm32")]
use showcase_core::{EventSources, Ports, Showcase, ShowcaseConfig, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod dom;
mod engine;
mod events;
mod frame;
mod page;
mod probe;
mod scroll;

pub use engine::ViewerBridge;

// The running page. Handlers only hold weak references to the showcase.
struct Mounted {
    _showcase: Rc<RefCell<Showcase>>,
    _subscriptions: Vec<Subscription>,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showcase-web starting");
    Ok(())
}

/// Entry point for the page script, called once with its viewer facade.
#[wasm_bindgen]
pub fn mount(viewer: ViewerBridge) {
    static MOUNT_CALLED: AtomicBool = AtomicBool::new(false);
    if MOUNT_CALLED.swap(true, Ordering::SeqCst) {
        log::warn!("[setup] already mounted; ignoring");
        return;
    }
    spawn_local(async move {
        if let Err(e) = init(viewer).await {
            log::error!("init error: {:?}", e);
        }
    });
}

async fn init(viewer: ViewerBridge) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = ShowcaseConfig::default();
    let scene_path = config.scene_path.clone();
    let scroll = Rc::new(scroll::WindowScroll::new(window.clone(), document.clone()));
    let ports = Ports {
        engine: Rc::new(engine::WebEngine::new(viewer.clone())),
        page: Rc::new(page::DomPage::new(&document)?),
        scroll: scroll.clone(),
    };

    // Loader first, so no progress event is missed.
    let showcase = Rc::new(RefCell::new(Showcase::new(config, ports)));
    let sources = Rc::new(EventSources::default());
    let subscriptions = Showcase::attach(&showcase, &sources);
    events::wire_engine(&viewer, &sources);
    events::wire_page(&document, &sources);
    events::wire_scroll(&window, scroll, &sources);
    frame::start_loop(sources);
    MOUNTED.with(|m| {
        *m.borrow_mut() = Some(Mounted {
            _showcase: showcase.clone(),
            _subscriptions: subscriptions,
        })
    });

    log::info!("[setup] loading {}", scene_path);
    JsFuture::from(viewer.load_scene(&scene_path))
        .await
        .map_err(dom::js_err)?;

    showcase
        .borrow_mut()
        .bind_scene(&probe::UserAgentProbe::new(&window));
    log::info!("[setup] scene bound");
    Ok(())
}

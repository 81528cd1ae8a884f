//! バーコードスキャナコンポーネント
//!
//! カメラ映像の表示と開始/停止操作。初期化失敗（Errored）後は
//! このセッション中は再開できず、停止後の再開もしない
//! （ストリームは再起動不能な一回限りの資源として扱う）

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlVideoElement;

use crate::scanner::{BarcodeScanner, ScannerState};

const VIDEO_ELEMENT_ID: &str = "scanner-video";

#[component]
pub fn ScannerView<F>(on_detect: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    let (state, set_state) = signal(ScannerState::Uninitialized);
    // 稼働中のスキャナはこのコンポーネントが抱え、stopで手放す
    let active = Rc::new(RefCell::new(None::<BarcodeScanner>));

    let on_start = {
        let active = Rc::clone(&active);
        let on_detect = on_detect.clone();
        move |_| {
            if state.get() != ScannerState::Uninitialized {
                return;
            }
            set_state.set(ScannerState::Initializing);

            let active = Rc::clone(&active);
            let on_detect = on_detect.clone();
            spawn_local(async move {
                let video: HtmlVideoElement = web_sys::window()
                    .unwrap()
                    .document()
                    .unwrap()
                    .get_element_by_id(VIDEO_ELEMENT_ID)
                    .unwrap()
                    .dyn_into()
                    .unwrap();

                match BarcodeScanner::start(&video, on_detect).await {
                    Ok(scanner) => {
                        active.borrow_mut().replace(scanner);
                        set_state.set(ScannerState::Streaming);
                    }
                    Err(e) => {
                        gloo::console::error!(format!("カメラを初期化できません: {}", e));
                        set_state.set(ScannerState::Errored);
                    }
                }
            });
        }
    };

    let on_stop = {
        let active = Rc::clone(&active);
        move |_| {
            if let Some(scanner) = active.borrow_mut().take() {
                scanner.stop();
            }
            set_state.set(ScannerState::Stopped);
        }
    };

    let status_label = move || match state.get() {
        ScannerState::Uninitialized => "カメラ未使用",
        ScannerState::Initializing => "カメラ初期化中...",
        ScannerState::Streaming => "スキャン中（EAN）",
        ScannerState::Stopped => "カメラ停止",
        ScannerState::Errored => "カメラを利用できません",
    };

    view! {
        <div class="scanner">
            <video
                id=VIDEO_ELEMENT_ID
                class=move || format!("scanner-video {}", state.get().as_str())
            />
            <div class="scanner-controls">
                <button
                    class="btn btn-secondary"
                    disabled=move || state.get() != ScannerState::Uninitialized
                    on:click=on_start
                >
                    "スキャン開始"
                </button>
                <button
                    class="btn btn-tertiary"
                    disabled=move || state.get() != ScannerState::Streaming
                    on:click=on_stop
                >
                    "停止"
                </button>
                <span class=move || format!("scanner-status {}", state.get().as_str())>
                    {status_label}
                </span>
            </div>
        </div>
    }
}

//! バーコードキャプチャパイプライン
//!
//! カメラストリームの取得・解放と、EANデコーダ（JS側の
//! ブラックボックス）への接続を担う。検出イベントはコールバック
//! 経由で通知するだけで、重複排除もデバウンスも行わない。
//! 同じコードを2回読めばコールバックも2回呼ばれる

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints};

use mixshelf_common::{Error, Result};

use crate::api::js_message;

/// パイプラインの状態
///
/// 遷移: Uninitialized → Initializing → Streaming → (Stopped | Errored)。
/// StoppedとErroredは終端で、このセッション中の再初期化はない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScannerState {
    #[default]
    Uninitialized,
    Initializing,
    Streaming,
    Stopped,
    Errored,
}

impl ScannerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScannerState::Uninitialized => "uninitialized",
            ScannerState::Initializing => "initializing",
            ScannerState::Streaming => "streaming",
            ScannerState::Stopped => "stopped",
            ScannerState::Errored => "errored",
        }
    }
}

#[wasm_bindgen(module = "/js/ean-decoder.js")]
extern "C" {
    #[wasm_bindgen(js_name = "startEanDecoder", catch)]
    fn start_ean_decoder(
        video: &HtmlVideoElement,
        on_detect: &js_sys::Function,
    ) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(js_name = "stopEanDecoder")]
    fn stop_ean_decoder();
}

/// 稼働中のカメラストリームを抱える資源オブジェクト
///
/// ストリームの開始・停止はこの型だけが行う。stop()は自身を
/// 消費するため、停止後の再開は型レベルでできない
pub struct BarcodeScanner {
    stream: MediaStream,
}

impl BarcodeScanner {
    /// カメラストリームを取得してvideo要素へ接続し、デコードを開始する
    ///
    /// 初期化は非同期で、権限拒否や非対応デバイスは `Err(CaptureInit)`。
    /// 成功後は `stop()` が呼ばれるまで検出が続く。デコードと通知は
    /// ハンドラの完了を待たずに進む
    pub async fn start<F>(video: &HtmlVideoElement, on_detect: F) -> Result<Self>
    where
        F: Fn(String) + 'static,
    {
        let window = web_sys::window()
            .ok_or_else(|| Error::CaptureInit("window is unavailable".to_string()))?;
        let media_devices = window
            .navigator()
            .media_devices()
            .map_err(|e| Error::CaptureInit(js_message(&e)))?;

        let mut constraints = MediaStreamConstraints::new();
        constraints.video(&JsValue::TRUE);

        let promise = media_devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| Error::CaptureInit(js_message(&e)))?;
        let stream_value = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| Error::CaptureInit(js_message(&e)))?;
        let stream: MediaStream = stream_value
            .dyn_into()
            .map_err(|_| Error::CaptureInit("MediaStreamを取得できません".to_string()))?;

        // 自動再生ポリシーの要件: ミュートかつインライン再生
        video.set_muted(true);
        video.set_plays_inline(true);
        video.set_src_object(Some(&stream));
        let _ = video.play();

        let closure = Closure::wrap(Box::new(move |code: JsValue| {
            if let Some(code) = code.as_string() {
                on_detect(code);
            }
        }) as Box<dyn FnMut(JsValue)>);

        start_ean_decoder(video, closure.as_ref().unchecked_ref())
            .map_err(|e| Error::CaptureInit(js_message(&e)))?;

        // デコーダが停止するまでコールバックを生かしておく
        closure.forget();

        Ok(Self { stream })
    }

    /// デコードを止め、ストリームの全トラックを解放する
    pub fn stop(self) {
        stop_ean_decoder();

        let tracks = self.stream.get_tracks();
        for i in 0..tracks.length() {
            if let Ok(track) = tracks.get(i).dyn_into::<web_sys::MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_state_default() {
        assert_eq!(ScannerState::default(), ScannerState::Uninitialized);
    }

    #[test]
    fn test_scanner_state_as_str() {
        assert_eq!(ScannerState::Uninitialized.as_str(), "uninitialized");
        assert_eq!(ScannerState::Initializing.as_str(), "initializing");
        assert_eq!(ScannerState::Streaming.as_str(), "streaming");
        assert_eq!(ScannerState::Stopped.as_str(), "stopped");
        assert_eq!(ScannerState::Errored.as_str(), "errored");
    }
}

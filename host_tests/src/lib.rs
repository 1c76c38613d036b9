#![allow(dead_code)]

//! ハードウェアに依存しないモジュールをホストPCでテストするためのクレート
//!
//! `src/` と同じモジュール階層を組み立てるので、`crate::core::clock` のような
//! パスはそのまま解決されます。ESP-IDF を使うファイルは含めません。
//!
//! 外側のモジュールに `src/` 以下のディレクトリを `#[path]` で指定し、
//! 内側はそのディレクトリからの相対ファイル名で読み込みます。

extern crate thiserror;

#[path = "../../src/core"]
pub mod core {
    #[path = "app_controller.rs"]
    pub mod app_controller;
    #[path = "clock.rs"]
    pub mod clock;
    #[path = "config_validation.rs"]
    pub mod config_validation;
    #[path = "wake_cycle.rs"]
    pub mod wake_cycle;
}

#[path = "../../src/hardware"]
pub mod hardware {
    pub mod camera {
        #[path = "image_source.rs"]
        pub mod image_source;
        #[path = "settings.rs"]
        pub mod settings;
    }

    pub mod led {
        #[path = "indicator.rs"]
        pub mod indicator;
    }
}

#[path = "../../src/communication"]
pub mod communication {
    #[path = "upload.rs"]
    pub mod upload;
    #[path = "wifi_link.rs"]
    pub mod wifi_link;
}

#[path = "../../src/power"]
pub mod power {
    #[path = "error_signal.rs"]
    pub mod error_signal;

    pub mod sleep {
        #[path = "controller.rs"]
        pub mod controller;
        #[path = "deep_sleep.rs"]
        pub mod deep_sleep;
    }
}

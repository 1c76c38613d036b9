/// cfg.toml から読み込む設定（src/core/config.rs と同じセクション名）
#[toml_cfg::toml_config]
pub struct Config {
    #[default("")]
    wifi_ssid: &'static str,
    #[default("")]
    server_host: &'static str,
}

fn main() {
    if !std::path::Path::new("cfg.toml").exists() {
        println!("cargo:warning=cfg.toml が見つかりません。cfg.toml.example をコピーして設定してください。");
    }

    let app_config = CONFIG;
    if app_config.wifi_ssid.is_empty() || app_config.server_host.is_empty() {
        println!("cargo:warning=wifi_ssid または server_host が未設定です。起動時に設定エラーとしてスリープします。");
    }
    println!("cargo:rerun-if-changed=cfg.toml");

    embuild::espidf::sysenv::output();
}

fn main() {
    println!("cargo:rerun-if-env-changed=YTDOWNLOADER_UPDATER_PUBKEY");
    tauri_build::build()
}

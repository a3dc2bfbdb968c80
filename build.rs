fn main() {
    println!("cargo:rerun-if-changed=src/bridge/bridge.js");
    tauri_build::build();
}

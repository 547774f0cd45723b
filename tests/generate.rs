//! End-to-end manifest generation against a real directory.
//!
//! Drives scan → write → read through the public API the CLI uses, and runs
//! the built binary for the `generate` and `check` commands.

use firmware_catalog::config::CatalogConfig;
use firmware_catalog::manifest::{read_manifest, write_manifest};
use firmware_catalog::scan::scan;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn firmware_dir(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in names {
        std::fs::write(tmp.path().join(name), b"\x00firmware").unwrap();
    }
    tmp
}

fn run(args: &[&str], source: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_firmware-catalog"))
        .args(args)
        .arg("--source")
        .arg(source)
        .output()
        .unwrap()
}

#[test]
fn generated_manifest_matches_ui_contract() {
    let tmp = firmware_dir(&[
        ".DS_Store",
        "donglee_mg21_zigbee_stable_6.10.3_115200.gbl",
        "donglep_cc2652p_zigbeerouter_stable_20240703_115200.hex",
        "unknownvendor_esp32_stable_1.0.0_921600.bin",
        "random.txt",
    ]);
    let config = CatalogConfig::default();

    let catalog = scan(tmp.path(), &config).unwrap();
    assert_eq!(catalog.skipped, ["random.txt"]);

    let path = write_manifest(tmp.path(), &config.output_file, &catalog.manifest).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let list = json["firmwareList"].as_array().unwrap();
    assert_eq!(list.len(), 3);

    let dongle_e = list
        .iter()
        .find(|r| r["name"] == "donglee_mg21_zigbee_stable_6.10.3_115200.gbl")
        .unwrap();
    assert_eq!(
        *dongle_e,
        serde_json::json!({
            "name": "donglee_mg21_zigbee_stable_6.10.3_115200.gbl",
            "dongleType": "ZBDongle-E",
            "chipModel": "mg21",
            "firmwareType": "Zigbee",
            "firmwareDesc": "stable",
            "version": "6.10.3",
            "baudRate": "115200",
        })
    );

    let esp32 = list
        .iter()
        .find(|r| r["chipModel"] == "esp32")
        .unwrap();
    assert_eq!(esp32["dongleType"], "unknown");
    assert_eq!(esp32["firmwareType"], "Official");
}

#[test]
fn regenerating_ignores_previous_manifest() {
    let tmp = firmware_dir(&["donglee_mg21_openthread_stable_2.4.4_460800.gbl"]);
    let config = CatalogConfig::default();

    let first = scan(tmp.path(), &config).unwrap();
    write_manifest(tmp.path(), &config.output_file, &first.manifest).unwrap();

    let second = scan(tmp.path(), &config).unwrap();
    assert!(second.skipped.is_empty());
    assert_eq!(second.manifest, first.manifest);

    let on_disk = read_manifest(&tmp.path().join("FIRMWARE_LIST.json")).unwrap();
    assert_eq!(on_disk, first.manifest);
}

#[test]
fn cli_generate_writes_manifest_and_reports() {
    let tmp = firmware_dir(&["donglee_mg21_multipan_stable_7.4.3_115200.gbl", "random.txt"]);

    let out = run(&["generate"], tmp.path());
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Firmware info did not match pattern: random.txt"));
    assert!(stdout.contains("Generated JSON file: FIRMWARE_LIST.json"));

    let manifest = read_manifest(&tmp.path().join("FIRMWARE_LIST.json")).unwrap();
    assert_eq!(manifest.firmware_list.len(), 1);
    assert_eq!(manifest.firmware_list[0].firmware_type, "MultiPAN");
}

#[test]
fn cli_generate_on_empty_directory_writes_empty_list() {
    let tmp = firmware_dir(&[]);

    let out = run(&["generate"], tmp.path());
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(tmp.path().join("FIRMWARE_LIST.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(json, serde_json::json!({ "firmwareList": [] }));
}

#[test]
fn cli_generate_fails_without_directory() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("firmware-build");

    let out = run(&["generate"], &missing);
    assert!(!out.status.success());
    assert!(!missing.join("FIRMWARE_LIST.json").exists());
}

#[test]
fn cli_check_detects_stale_manifest() {
    let tmp = firmware_dir(&["donglee_mg21_zigbee_stable_6.10.3_115200.gbl"]);

    assert!(!run(&["check"], tmp.path()).status.success());
    assert!(run(&["generate"], tmp.path()).status.success());
    assert!(run(&["check"], tmp.path()).status.success());

    std::fs::write(
        tmp.path().join("donglep_cc2652p_zigbee_stable_20240703_115200.hex"),
        b"",
    )
    .unwrap();
    assert!(!run(&["check"], tmp.path()).status.success());
}

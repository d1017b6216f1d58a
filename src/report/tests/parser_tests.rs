//! End-to-end tests for the report assembler.

use chrono::NaiveDate;

use super::{member_header, member_line};
use crate::report::{parse_report, render_report};
use crate::Error;

const SEPARATOR: &str =
    "---------------------------------------------------------------------------";

fn unit_line(name: &str, location: &str, elevation: &str) -> String {
    format!("{name:<20}{location:<35}{elevation}")
}

fn system_line(cells: &[&str; 7]) -> String {
    format!(
        "{:<20}{:<12}{:<9}{:<13}{:<13}{:<11}{}",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5], cells[6]
    )
}

fn sample_report() -> String {
    let mut lines: Vec<String> = vec![
        r"                      C:\wwplan\reports\sample.report.txt".to_string(),
        "Radio Mobile".to_string(),
        "Report generated at 13:56:45 on 04-14-2010".to_string(),
        SEPARATOR.to_string(),
        "General information".to_string(),
        SEPARATOR.to_string(),
        "Elevation data: SRTM3".to_string(),
        "Picture size: 1000x800 pixels".to_string(),
        SEPARATOR.to_string(),
        "Active units information".to_string(),
        SEPARATOR.to_string(),
        unit_line("Name", "Location", "Elevation"),
        unit_line("Josjojauarina 1", "13°31'52\"S 071°52'55\"W FH48VL", "3900,0m"),
        unit_line("Urpay", "09°19'45\"S 075°17'41\"W FI20IQ", "248,0m"),
        unit_line("Huiracochan", "13°32'30\"S 071°51'00\"W FH48VL", "4000,0m"),
        SEPARATOR.to_string(),
        "Systems".to_string(),
        SEPARATOR.to_string(),
        system_line(&[
            "Name", "Pwr Tx", "Loss", "Loss (+)", "Rx thr.", "Ant. G.", "Ant. Type",
        ]),
        system_line(&[
            "wifi1", "10,000W", "0,5dB", "0,000dB/m", "-107,0dBm", "2,0dBi", "omni.ant",
        ]),
        SEPARATOR.to_string(),
        "Active nets information".to_string(),
        SEPARATOR.to_string(),
        String::new(),
        "Josjo1 [wifia-6mbs]".to_string(),
        String::new(),
        member_header("# 1  2  3"),
        member_line("Josjojauarina 1", "1     62 81", "Master", "wifi1", "5,0m"),
        member_line("Urpay", "2  62", "Slave", "wifi1", "2,0m"),
        member_line("Huiracochan", "3  81", "Slave", "wifi1", "2,0m"),
        String::new(),
        "  Worst case propagation Quality = 62".to_string(),
    ];
    lines.push(String::new());
    lines.join("\n")
}

#[test]
fn parses_complete_report() {
    let report = parse_report(&sample_report()).unwrap();

    assert_eq!(
        report.generated_on,
        NaiveDate::from_ymd_opt(2010, 4, 14)
            .unwrap()
            .and_hms_opt(13, 56, 45)
            .unwrap()
    );
    assert_eq!(
        report.general_information,
        vec![
            "Elevation data: SRTM3".to_string(),
            "Picture size: 1000x800 pixels".to_string()
        ]
    );

    let unit_names: Vec<&str> = report.units.keys().collect();
    assert_eq!(unit_names, vec!["Josjojauarina 1", "Urpay", "Huiracochan"]);

    let wifi1 = report.systems.get("wifi1").unwrap();
    assert_eq!(wifi1.pwr_tx, "10,000W");
    assert_eq!(wifi1.loss, "0,5dB");
    assert_eq!(wifi1.loss_plus, "0,000dB/m");
    assert_eq!(wifi1.rx_threshold, "-107,0dBm");
    assert_eq!(wifi1.antenna_gain, "2,0dBi");
    assert_eq!(wifi1.antenna_type, "omni.ant");

    let net = report.nets.get("Josjo1 [wifia-6mbs]").unwrap();
    assert_eq!(net.max_quality, 62);
    assert_eq!(net.links.len(), 2);
    assert_eq!(
        net.links[0].peers,
        ("Josjojauarina 1".to_string(), "Urpay".to_string())
    );
    assert_eq!(net.links[0].quality, Some(62));
    assert_eq!(net.links[0].distance, 597151);
    assert_eq!(
        net.links[1].peers,
        ("Josjojauarina 1".to_string(), "Huiracochan".to_string())
    );
    assert_eq!(net.links[1].quality, Some(81));
    assert_eq!(net.links[1].distance, 3647);
}

#[test]
fn reparsing_is_deterministic() {
    let text = sample_report();
    let first = parse_report(&text).unwrap();
    let second = parse_report(&text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn render_preserves_order_and_integers() {
    let report = parse_report(&sample_report()).unwrap();
    let dump = render_report(&report).unwrap();

    // insertion order of the units map survives serialization
    let josjo = dump.find("\"Josjojauarina 1\"").unwrap();
    let urpay = dump.find("\"Urpay\"").unwrap();
    let huiracochan = dump.find("\"Huiracochan\"").unwrap();
    assert!(josjo < urpay && urpay < huiracochan);

    // integer fields stay integers
    assert!(dump.contains("\"elevation\": 3900"));
    assert!(dump.contains("\"distance\": 597151"));
    assert!(dump.contains("\"max_quality\": 62"));
}

#[test]
fn missing_units_section_is_fatal() {
    let text = sample_report().replace("Active units information", "Another title");
    let err = parse_report(&text).unwrap_err();
    match err {
        Error::Format { section, .. } => {
            assert_eq!(section, "active_units_information");
        }
        other => panic!("expected Format error, got {other:?}"),
    }
}

#[test]
fn missing_nets_section_is_fatal() {
    let text = sample_report().replace("Active nets information", "Another title");
    assert!(parse_report(&text).is_err());
}

#[test]
fn report_without_general_information_still_parses() {
    let text = sample_report().replace("General information", "Irrelevant notes");
    let report = parse_report(&text).unwrap();
    assert!(report.general_information.is_empty());
}

use super::*;
use crate::config::TransactionIllustrationConfig;
use crate::create_transaction_illustration;
use crate::model::{CellInfo, Script, TransactionData};
use crate::renderers::Format;

fn scene() -> Scene {
    let data = TransactionData {
        inputs: vec![CellInfo::new("100000000", Script::default())],
        outputs: vec![],
        tx_hash: "0xfeed".to_string(),
    };
    create_transaction_illustration(&TransactionIllustrationConfig::new(data)).unwrap()
}

#[test]
fn test_document_shape() {
    let out = JsonRenderer::default().render(&scene()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["view_box"]["width"], 960.0);
    assert_eq!(v["links"].as_array().unwrap().len(), 2);
    assert_eq!(v["glyphs"][0]["side"], "inputs");
    assert_eq!(v["glyphs"][0]["glyphs"][0]["kind"], "transaction");
    assert_eq!(v["glyphs"][0]["glyphs"][1]["label"]["text"], "1 CKB");
    assert_eq!(v["glyphs"][0]["glyphs"][1]["circle"]["fill"]["rest"], "#7fc97f");
}

#[test]
fn test_pretty_and_compact_agree() {
    let s = scene();
    let pretty = JsonRenderer { pretty: true }.render(&s).unwrap();
    let compact = JsonRenderer { pretty: false }.render(&s).unwrap();
    assert!(pretty.contains('\n'));
    assert!(!compact.contains('\n'));
    let a: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    let b: serde_json::Value = serde_json::from_str(&compact).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_format_selection() {
    assert_eq!("SVG".parse::<Format>().unwrap(), Format::Svg);
    assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
    assert!("png".parse::<Format>().is_err());
    assert_eq!(Format::default(), Format::Svg);
}

#[test]
fn test_render_through_format_returns_result() {
    let s = scene();
    let json = Format::Json.renderer().render(&s).unwrap();
    let svg = Format::Svg.renderer().render(&s).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
    assert!(svg.starts_with("<svg "));
}

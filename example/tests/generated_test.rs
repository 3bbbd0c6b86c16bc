//! Exercises the code `build.rs` generated from `enums.json`.

use brine_enumer::serde::de::value::{Error as ValueError, StrDeserializer};
use brine_enumer::serde::de::IntoDeserializer;
use brine_enumer::serde::Deserialize;
use brine_enumer::serde_json::{self, json, Value};
use brine_enumer::{EnumError, Enumer};

use example_app::generated::{
    enum_color_of, enum_gapped_of, enum_nothing_of, enum_prime_of, Color, Gapped, Glyph, Nothing,
    Pill, Prime, Temperature,
};

fn round_trip<T>()
where
    T: Enumer + PartialEq + std::fmt::Debug,
{
    for value in T::VALUES {
        assert_eq!(T::from_name(value.name()).unwrap(), *value);
    }
}

#[test]
fn canonical_strings() {
    assert_eq!(Color::Red.as_str(), "Red");
    assert_eq!(Color::Blue.to_string(), "Blue");
    assert_eq!(Pill::Paracetamol.as_str(), "paracetamol (acetaminophen)");
    assert_eq!(Gapped::Three.as_str(), "three");
    assert_eq!(Gapped::Eleven.as_str(), "eleven");
    assert_eq!(Prime::P2.as_str(), "P2");
    assert_eq!(Prime::P43.as_str(), "P43");
    assert_eq!(Temperature::Cold.as_str(), "cold");
    assert_eq!(Temperature::Hot.as_str(), "hot");
}

#[test]
fn lookup_round_trips_every_layout() {
    round_trip::<Color>();
    round_trip::<Pill>();
    round_trip::<Gapped>();
    round_trip::<Prime>();
    round_trip::<Temperature>();
    round_trip::<Glyph>();
    round_trip::<Nothing>();
}

#[test]
fn values_keep_declaration_order() {
    assert_eq!(Color::VALUES, &[Color::Red, Color::Green, Color::Blue]);
    assert_eq!(
        Gapped::names(),
        vec!["one", "two", "three", "ten", "eleven"]
    );
    assert_eq!(Prime::VALUES.len(), 13);
    assert_eq!(Prime::VALUES[12], Prime::P43);
    assert!(Nothing::VALUES.is_empty());
    assert_eq!(Color::TYPE_NAME, "Color");
}

#[test]
fn discriminants_match_the_manifest() {
    assert_eq!(Gapped::Ten as i64, 10);
    assert_eq!(Prime::P31 as i64, 31);
    assert_eq!(Temperature::Cold as i64, -1);
}

#[test]
fn lookup_not_found() {
    let err = enum_color_of("Purple").unwrap_err();
    assert!(err.is_not_found());
    let msg = err.to_string();
    assert!(msg.contains("Purple"));
    assert!(msg.contains("Color"));
    assert_eq!(msg, "Purple does not belong to Color values");

    // Lookups are exact: no case folding, no trimming.
    assert!(enum_color_of("red").is_err());
    assert!(enum_gapped_of(" one").is_err());
    assert!(enum_prime_of("P4").is_err());
    assert_eq!(enum_prime_of("P41").unwrap(), Prime::P41);
}

#[test]
fn empty_type_lookup_always_fails() {
    let err = enum_nothing_of("").unwrap_err();
    assert_eq!(err.to_string(), " does not belong to Nothing values");
    assert!(Nothing::from_json(b"\"x\"").unwrap_err().is_not_found());
}

#[test]
fn json_adapter() {
    assert_eq!(Color::Red.to_json().unwrap(), b"\"Red\"".to_vec());
    assert_eq!(Color::from_json(b"\"Red\"").unwrap(), Color::Red);
    assert_eq!(
        Pill::from_json(b"\"paracetamol (acetaminophen)\"").unwrap(),
        Pill::Paracetamol
    );

    let err = Color::from_json(b"123").unwrap_err();
    assert!(err.is_type_mismatch());
    assert!(err.to_string().contains("123"));
    assert!(err.to_string().contains("Color"));

    let err = Color::from_json(b"\"Purple\"").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Purple does not belong to Color values");
}

#[test]
fn text_adapter() {
    assert_eq!(Color::Blue.to_text(), b"Blue".to_vec());
    assert_eq!(Color::from_text(b"Blue").unwrap(), Color::Blue);
    assert_eq!("ten".parse::<Gapped>().unwrap(), Gapped::Ten);

    let err = Color::from_text(b"\"Blue\"").unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!("Teal".parse::<Color>(), Err(EnumError::NotFound { .. })));
}

#[test]
fn text_adapter_rejects_invalid_utf8() {
    assert_eq!(Glyph::Replacement.as_str(), "\u{fffd}");
    assert_eq!(Glyph::from_text("\u{fffd}".as_bytes()).unwrap(), Glyph::Replacement);

    // A lossy decode of these bytes would be exactly the display string above.
    let err = Glyph::from_text(&[0xFF]).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "\u{fffd} does not belong to Glyph values");

    assert!(Glyph::from_text(&[b'a', 0xC0]).unwrap_err().is_not_found());
    assert_eq!(Glyph::from_text(b"a").unwrap(), Glyph::Letter);
}

#[test]
fn scalar_adapter_serializes_a_string() {
    assert_eq!(serde_json::to_value(Color::Green).unwrap(), json!("Green"));
    assert_eq!(serde_json::to_string(&Prime::P13).unwrap(), "\"P13\"");
    assert_eq!(
        serde_json::to_value(vec![Temperature::Cold, Temperature::Hot]).unwrap(),
        json!(["cold", "hot"])
    );
}

#[test]
fn scalar_adapter_uses_the_deserializer() {
    let de: StrDeserializer<ValueError> = "Green".into_deserializer();
    assert_eq!(Color::deserialize(de).unwrap(), Color::Green);

    let value = Value::String("eleven".to_string());
    assert_eq!(Gapped::deserialize(value).unwrap(), Gapped::Eleven);

    // The deserializer's own error is returned unchanged.
    let err = Color::deserialize(json!(123)).unwrap_err();
    assert!(err.to_string().contains("invalid type"));

    // A failed lookup keeps its message.
    let de: StrDeserializer<ValueError> = "Purple".into_deserializer();
    let err = Color::deserialize(de).unwrap_err();
    assert_eq!(err.to_string(), "Purple does not belong to Color values");
}

#[test]
fn scalar_adapter_inside_documents() {
    #[derive(Debug, Deserialize)]
    #[serde(crate = "brine_enumer::serde")]
    struct Order {
        pill:  Pill,
        color: Color,
    }

    let order: Order =
        serde_json::from_str(r#"{ "pill": "Aspirin", "color": "Blue" }"#).unwrap();
    assert_eq!(order.pill, Pill::Aspirin);
    assert_eq!(order.color, Color::Blue);

    let err = serde_json::from_str::<Order>(r#"{ "pill": "Aspirin", "color": "Mauve" }"#)
        .unwrap_err();
    assert!(err.to_string().contains("Mauve does not belong to Color values"));
}

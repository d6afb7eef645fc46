//! MusicXML harmony parser — reads `<harmony>` elements into [`Harmony`] values.

use roxmltree::{Document, Node};

use crate::error::{ChordSymbolError, Result};
use crate::model::*;

/// Parse every `<harmony>` element in a MusicXML document or fragment,
/// in document order. The fragment needs a single root element (a whole
/// `score-partwise`, one `measure`, or a bare `harmony`).
pub fn parse_harmonies(xml: &str) -> Result<Vec<Harmony>> {
    // MusicXML files include a DOCTYPE declaration, so we must allow DTDs
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = Document::parse_with_options(xml, options)
        .map_err(|e| ChordSymbolError::Xml(e.to_string()))?;

    let harmonies: Vec<Harmony> = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "harmony")
        .map(|n| parse_harmony(&n))
        .collect();

    log::debug!("parsed {} harmonies", harmonies.len());
    Ok(harmonies)
}

fn parse_f64(node: &Node) -> Option<f64> {
    node.text().and_then(|t| t.trim().parse().ok())
}

fn parse_root(node: &Node, step_tag: &str, alter_tag: &str) -> HarmonyRoot {
    let mut root = HarmonyRoot::new("C", None);
    for child in node.children().filter(|n| n.is_element()) {
        let name = child.tag_name().name();
        if name == step_tag {
            root.step = child.text().unwrap_or("C").trim().to_string();
        } else if name == alter_tag {
            root.alter = parse_f64(&child);
        }
    }
    root
}

fn parse_harmony(node: &Node) -> Harmony {
    let mut root = HarmonyRoot::new("C", None);
    let mut kind = "major".to_string();
    let mut bass = None;

    for child in node.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "root" => root = parse_root(&child, "root-step", "root-alter"),
            "kind" => {
                kind = child.text().unwrap_or("major").trim().to_string();
            }
            "bass" => bass = Some(parse_root(&child, "bass-step", "bass-alter")),
            _ => {}
        }
    }

    Harmony { root, kind, bass }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_measure_with_two_harmonies() {
        let xml = r#"<measure number="1">
            <harmony>
                <root><root-step>F</root-step></root>
                <kind>dominant</kind>
            </harmony>
            <note/>
            <harmony>
                <root><root-step>B</root-step><root-alter>-1</root-alter></root>
                <kind>major-seventh</kind>
                <bass><bass-step>D</bass-step></bass>
            </harmony>
        </measure>"#;

        let harmonies = parse_harmonies(xml).unwrap();
        assert_eq!(
            harmonies,
            vec![
                Harmony::new(HarmonyRoot::new("F", None), "dominant"),
                Harmony::new(HarmonyRoot::new("B", Some(-1.0)), "major-seventh")
                    .with_bass(HarmonyRoot::new("D", None)),
            ]
        );
    }

    #[test]
    fn missing_parts_default_to_c_major() {
        let harmonies = parse_harmonies("<harmony/>").unwrap();
        assert_eq!(harmonies, vec![Harmony::new(HarmonyRoot::new("C", None), "major")]);
    }

    #[test]
    fn doctype_is_accepted() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE score-partwise PUBLIC "-//Recordare//DTD MusicXML 3.1 Partwise//EN" "http://www.musicxml.org/dtds/partwise.dtd">
<score-partwise version="3.1"><part id="P1"><measure number="1">
<harmony><root><root-step>G</root-step></root><kind>minor</kind></harmony>
</measure></part></score-partwise>"#;
        let harmonies = parse_harmonies(xml).unwrap();
        assert_eq!(harmonies.len(), 1);
        assert_eq!(harmonies[0].kind, "minor");
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(matches!(parse_harmonies("<harmony>"), Err(ChordSymbolError::Xml(_))));
    }
}

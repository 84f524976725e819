//! Query-string encoding for the search endpoints.
//!
//! Pairs are emitted in a fixed order with the field's wire name as key and
//! form-urlencoded values (UTF-8 percent-encoding, space as `+`).
//! `recordPacking` is always the final pair. Ranges and cross-field
//! consistency are left to the upstream, which reports violations through
//! the `message` envelope.

use url::form_urlencoded;

use crate::core::SearchParameters;

/// Builds the query string for `params`.
#[must_use]
pub fn encode(params: &SearchParameters) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs(params) {
        serializer.append_pair(key, &value);
    }
    serializer.append_pair("recordPacking", params.packing().as_str());
    serializer.finish()
}

/// Present fields as `(wire name, value)` in wire order, excluding
/// `recordPacking`. Empty text counts as absent.
fn pairs(params: &SearchParameters) -> Vec<(&'static str, String)> {
    fn text(out: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            out.push((key, v.to_string()));
        }
    }
    fn shown<T: ToString>(out: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<T>) {
        if let Some(v) = value {
            out.push((key, v.to_string()));
        }
    }

    let mut out = Vec::new();
    shown(&mut out, "startRecord", params.start_record);
    shown(&mut out, "maximumRecords", params.maximum_records);
    text(&mut out, "nameOfHouse", params.name_of_house.map(|h| h.as_str()));
    text(&mut out, "nameOfMeeting", params.name_of_meeting.as_deref());
    text(&mut out, "any", params.any.as_deref());
    text(&mut out, "speaker", params.speaker.as_deref());
    text(&mut out, "from", params.from.as_deref());
    text(&mut out, "until", params.until.as_deref());
    shown(&mut out, "supplementAndAppendix", params.supplement_and_appendix);
    shown(&mut out, "contentsAndIndex", params.contents_and_index);
    text(&mut out, "searchRange", params.search_range.map(|r| r.as_str()));
    shown(&mut out, "closing", params.closing);
    shown(&mut out, "speechNumber", params.speech_number);
    text(&mut out, "speakerPosition", params.speaker_position.as_deref());
    text(&mut out, "speakerGroup", params.speaker_group.as_deref());
    text(&mut out, "speakerRole", params.speaker_role.map(|r| r.as_str()));
    text(&mut out, "speechID", params.speech_id.as_deref());
    text(&mut out, "issueID", params.issue_id.as_deref());
    shown(&mut out, "sessionFrom", params.session_from);
    shown(&mut out, "sessionTo", params.session_to);
    shown(&mut out, "issueFrom", params.issue_from);
    shown(&mut out, "issueTo", params.issue_to);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NameOfHouse, RecordPacking, SearchRange, SpeakerRole};
    use proptest::prelude::*;

    #[test]
    fn test_empty_params_only_packing() {
        assert_eq!(encode(&SearchParameters::default()), "recordPacking=json");
    }

    #[test]
    fn test_japanese_scenario() {
        let params = SearchParameters {
            name_of_house: Some(NameOfHouse::Representatives),
            any: Some("科学技術".to_string()),
            maximum_records: Some(10),
            ..Default::default()
        };
        let query = encode(&params);
        assert!(query.contains("nameOfHouse=%E8%A1%86%E8%AD%B0%E9%99%A2"));
        assert!(query.contains("any=%E7%A7%91%E5%AD%A6%E6%8A%80%E8%A1%93"));
        assert!(query.contains("maximumRecords=10"));
        assert!(query.ends_with("&recordPacking=json"));
    }

    #[test]
    fn test_space_becomes_plus() {
        let params = SearchParameters {
            speaker: Some("岸田 石破".to_string()),
            ..Default::default()
        };
        assert_eq!(
            encode(&params),
            "speaker=%E5%B2%B8%E7%94%B0+%E7%9F%B3%E7%A0%B4&recordPacking=json"
        );
    }

    #[test]
    fn test_booleans_and_false_kept() {
        let params = SearchParameters {
            closing: Some(true),
            supplement_and_appendix: Some(false),
            ..Default::default()
        };
        let query = encode(&params);
        assert!(query.contains("closing=true"));
        assert!(query.contains("supplementAndAppendix=false"));
        assert!(!query.contains("contentsAndIndex"));
    }

    #[test]
    fn test_wire_order() {
        let params = SearchParameters {
            issue_to: Some(3),
            start_record: Some(31),
            from: Some("2024-01-01".to_string()),
            until: Some("2023-01-01".to_string()),
            speech_id: Some("ABC_001".to_string()),
            ..Default::default()
        };
        assert_eq!(
            encode(&params),
            "startRecord=31&from=2024-01-01&until=2023-01-01&speechID=ABC_001&issueTo=3&recordPacking=json"
        );
    }

    #[test]
    fn test_empty_text_omitted() {
        let params = SearchParameters {
            any: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(encode(&params), "recordPacking=json");
    }

    #[test]
    fn test_xml_packing_last() {
        let params = SearchParameters {
            record_packing: Some(RecordPacking::Xml),
            session_from: Some(200),
            ..Default::default()
        };
        assert_eq!(encode(&params), "sessionFrom=200&recordPacking=xml");
    }

    #[test]
    fn test_enum_values_percent_encoded() {
        let params = SearchParameters {
            search_range: Some(SearchRange::PreambleAndBody),
            speaker_role: Some(SpeakerRole::Witness),
            ..Default::default()
        };
        assert_eq!(
            encode(&params),
            "searchRange=%E5%86%92%E9%A0%AD%E3%83%BB%E6%9C%AC%E6%96%87\
             &speakerRole=%E8%A8%BC%E4%BA%BA&recordPacking=json"
        );
    }

    fn keys(query: &str) -> Vec<String> {
        form_urlencoded::parse(query.as_bytes())
            .map(|(k, _)| k.into_owned())
            .collect()
    }

    fn search_range() -> impl Strategy<Value = SearchRange> {
        prop_oneof![
            Just(SearchRange::Preamble),
            Just(SearchRange::Body),
            Just(SearchRange::PreambleAndBody),
        ]
    }

    fn speaker_role() -> impl Strategy<Value = SpeakerRole> {
        prop_oneof![
            Just(SpeakerRole::Witness),
            Just(SpeakerRole::Reference),
            Just(SpeakerRole::PublicHearing),
        ]
    }

    proptest! {
        #[test]
        fn prop_absent_fields_never_encoded(
            start in proptest::option::of(1i64..10_000),
            max in proptest::option::of(-10i64..200),
            session_to in proptest::option::of(0i64..300),
            closing in proptest::option::of(any::<bool>()),
            speaker in proptest::option::of("[a-z ]{1,8}"),
        ) {
            let params = SearchParameters {
                start_record: start,
                maximum_records: max,
                session_to,
                closing,
                speaker: speaker.clone(),
                ..Default::default()
            };
            let query = encode(&params);
            let keys = keys(&query);

            prop_assert_eq!(keys.contains(&"startRecord".to_string()), start.is_some());
            prop_assert_eq!(keys.contains(&"maximumRecords".to_string()), max.is_some());
            prop_assert_eq!(keys.contains(&"sessionTo".to_string()), session_to.is_some());
            prop_assert_eq!(keys.contains(&"closing".to_string()), closing.is_some());
            prop_assert_eq!(
                keys.contains(&"speaker".to_string()),
                speaker.is_some_and(|s| !s.is_empty())
            );
            prop_assert!(!keys.contains(&"any".to_string()));
            prop_assert_eq!(keys.last().map(String::as_str), Some("recordPacking"));
        }

        #[test]
        fn prop_values_decode_back(
            start in -1_000i64..100_000,
            text in "\\PC{1,12}",
            contents in any::<bool>(),
            range in search_range(),
            role in speaker_role(),
            issue_from in any::<i64>(),
            issue_to in any::<i64>(),
        ) {
            let params = SearchParameters {
                start_record: Some(start),
                name_of_meeting: Some(text.clone()),
                contents_and_index: Some(contents),
                search_range: Some(range),
                speaker_role: Some(role),
                issue_from: Some(issue_from),
                issue_to: Some(issue_to),
                ..Default::default()
            };
            let decoded: Vec<(String, String)> = form_urlencoded::parse(encode(&params).as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            let expected: Vec<(String, String)> = [
                ("startRecord", start.to_string()),
                ("nameOfMeeting", text),
                ("contentsAndIndex", contents.to_string()),
                ("searchRange", range.as_str().to_string()),
                ("speakerRole", role.as_str().to_string()),
                ("issueFrom", issue_from.to_string()),
                ("issueTo", issue_to.to_string()),
                ("recordPacking", "json".to_string()),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
            prop_assert_eq!(decoded, expected);
        }
    }
}

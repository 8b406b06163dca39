use lemma_protocol::Morph;
use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    combinator::all_consuming,
    multi::separated_list1,
    sequence::separated_pair,
    IResult,
};

/// Feature names may be layered, e.g. `Number[psor]`.
fn feature_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '[' || c == ']')(input)
}

fn feature_value(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c != ',' && c != '|' && c != '=')(input)
}

fn feature(input: &str) -> IResult<&str, (&str, Vec<&str>)> {
    separated_pair(
        feature_name,
        char('='),
        separated_list1(char(','), feature_value),
    )(input)
}

/// Parses the FEATS column. `_` is the empty bag.
pub fn parse_feats(input: &str) -> Option<Morph> {
    let mut morph = Morph::new();
    if input == "_" {
        return Some(morph);
    }

    let (_, features) = all_consuming(separated_list1(char('|'), feature))(input).ok()?;
    for (name, values) in features {
        morph.insert(name, values);
    }
    Some(morph)
}

/// The MISC attributes the engine binding cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Misc {
    pub space_after: bool,
    pub stop: Option<bool>,
}

impl Misc {
    pub fn parse(input: &str) -> Self {
        let mut misc = Misc {
            space_after: true,
            stop: None,
        };
        if input == "_" {
            return misc;
        }

        for (key, value) in input.split('|').filter_map(|attr| attr.split_once('=')) {
            match key {
                "SpaceAfter" => misc.space_after = value != "No",
                "Stop" => misc.stop = Some(value == "Yes"),
                _ => {}
            }
        }
        misc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lemma_protocol::{Gender, Number};

    #[test]
    fn test_feats() {
        let morph = parse_feats("Case=Acc|Gender=Masc|Number=Sing|Number[psor]=Sing|Poss=Yes").unwrap();
        assert_eq!(morph.gender(), Some(Gender::Masculine));
        assert_eq!(morph.number(), Some(Number::Singular));
        assert_eq!(morph.get("Number[psor]"), ["Sing".to_string()]);
    }

    #[test]
    fn test_multi_valued_feature() {
        let morph = parse_feats("Gender=Fem,Neut|Number=Plur").unwrap();
        assert_eq!(morph.get("Gender").len(), 2);
        assert_eq!(morph.gender(), Some(Gender::Feminine));
    }

    #[test]
    fn test_empty_and_malformed_feats() {
        assert!(parse_feats("_").unwrap().is_empty());
        assert!(parse_feats("Gender").is_none());
        assert!(parse_feats("Gender=Masc|").is_none());
    }

    #[test]
    fn test_misc() {
        assert_eq!(
            Misc::parse("SpaceAfter=No|Stop=Yes"),
            Misc { space_after: false, stop: Some(true) }
        );
        assert_eq!(Misc::parse("_"), Misc { space_after: true, stop: None });
        assert_eq!(Misc::parse("Stop=No").stop, Some(false));
    }
}

use nom::{
    branch::alt,
    bytes::complete::{take_till, take_till1},
    character::complete::{char, digit1, space0, space1},
    combinator::{all_consuming, map, map_res, rest},
    multi::separated_list1,
    sequence::{pair, preceded, tuple},
    IResult,
};

/// First CoNLL-U column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenIndex {
    /// A syntactic word, 1-based.
    Word(usize),
    /// Multiword token range such as `1-2`.
    Range,
    /// Empty node such as `3.1`.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Head {
    Root,
    Unspecified,
    Word(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub index: TokenIndex,
    pub form: &'a str,
    pub lemma: &'a str,
    pub upos: &'a str,
    pub xpos: &'a str,
    pub feats: &'a str,
    pub head: Head,
    pub deprel: &'a str,
    pub misc: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment { key: &'a str, value: Option<&'a str> },
    Row(Row<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    Columns(usize),
    Id(String),
    Head(String),
}

const COLUMNS: usize = 10;

/// Columns are TAB separated. Lines without a TAB are split on runs of
/// spaces so hand-written fixtures stay readable.
fn columns(input: &str) -> IResult<&str, Vec<&str>> {
    if input.contains('\t') {
        all_consuming(separated_list1(char('\t'), take_till(|c: char| c == '\t')))(input)
    } else {
        all_consuming(separated_list1(space1, take_till1(|c: char| c == ' ' || c == '\t')))(input)
    }
}

fn token_index(input: &str) -> IResult<&str, TokenIndex> {
    alt((
        map(tuple((digit1, char('-'), digit1)), |_| TokenIndex::Range),
        map(tuple((digit1, char('.'), digit1)), |_| TokenIndex::Empty),
        map_res(digit1, |d: &str| d.parse::<usize>().map(TokenIndex::Word)),
    ))(input)
}

fn head_field(input: &str) -> IResult<&str, Head> {
    alt((
        map(char('_'), |_| Head::Unspecified),
        map_res(digit1, |d: &str| {
            d.parse::<usize>()
                .map(|n| if n == 0 { Head::Root } else { Head::Word(n) })
        }),
    ))(input)
}

fn comment(input: &str) -> IResult<&str, &str> {
    preceded(pair(char('#'), space0), rest)(input)
}

pub fn parse_line(line: &str) -> Result<Line<'_>, RowError> {
    let line = line.trim_end();
    if line.trim_start().is_empty() {
        return Ok(Line::Blank);
    }

    if let Ok((_, body)) = comment(line) {
        return Ok(match body.split_once('=') {
            Some((key, value)) => Line::Comment {
                key: key.trim(),
                value: Some(value.trim()),
            },
            None => Line::Comment {
                key: body.trim(),
                value: None,
            },
        });
    }

    let fields = match columns(line) {
        Ok((_, fields)) => fields,
        Err(_) => return Err(RowError::Columns(0)),
    };
    if fields.len() != COLUMNS {
        return Err(RowError::Columns(fields.len()));
    }

    let index = match all_consuming(token_index)(fields[0]) {
        Ok((_, index)) => index,
        Err(_) => return Err(RowError::Id(fields[0].to_string())),
    };
    let head = match all_consuming(head_field)(fields[6]) {
        Ok((_, head)) => head,
        Err(_) => return Err(RowError::Head(fields[6].to_string())),
    };

    Ok(Line::Row(Row {
        index,
        form: fields[1],
        lemma: fields[2],
        upos: fields[3],
        xpos: fields[4],
        feats: fields[5],
        head,
        deprel: fields[7],
        misc: fields[9],
    }))
}

//! Parser for known answer files in the CAVP `.rsp` layout.

use std::{fs, path::Path};

pub struct KatSet {
    /// Digest length in bits
    pub length: usize,
    pub tests: Vec<Test>,
}

pub struct Test {
    /// Message length in bits
    pub len: usize,
    pub msg: Vec<u8>,
    pub digest: String,
}

impl KatSet {
    pub fn load(path: &Path) -> Self {
        let content = fs::read_to_string(path)
            .unwrap_or_else(|err| panic!("unable to read {}: {err}", path.display()));
        Self::parse(&content)
    }

    fn parse(inp: &str) -> Self {
        let mut lines = inp
            .lines()
            .map(str::trim)
            .filter(|line| !(line.starts_with('#') || line.is_empty()));

        let length = lines
            .next()
            .and_then(|line| line.strip_prefix("[L = "))
            .and_then(|line| line.strip_suffix(']'))
            .expect("missing [L = ...] header")
            .parse()
            .expect("L can't be parsed as usize");

        let mut tests = vec![];
        while let Some(len_line) = lines.next() {
            let len: usize = field(len_line, "Len").parse().expect("unable to parse Len");
            assert_eq!(0, len % 8, "only byte-oriented vectors are supported");

            let mut msg = hex::decode(field(lines.next().expect("missing Msg"), "Msg"))
                .expect("unable to decode Msg");
            // a zero length message is written as a single 00 byte
            msg.truncate(len / 8);
            let digest = field(lines.next().expect("missing MD"), "MD").to_owned();
            assert_eq!(length / 4, digest.len(), "MD has the wrong length");

            tests.push(Test { len, msg, digest });
        }
        KatSet { length, tests }
    }
}

fn field<'a>(line: &'a str, name: &str) -> &'a str {
    line.strip_prefix(name)
        .and_then(|rest| rest.trim_start().strip_prefix('='))
        .map(str::trim)
        .unwrap_or_else(|| panic!("expected `{name} = ...`, found {line:?}"))
}

//! Core trait definitions for solver templates.
//!
//! To add a problem to the catalog, implement [`Template`] for a unit struct
//! describing it. The trait splits a judge program into three stages:
//! - `parse`: read the positional input format into a typed instance,
//!   rejecting anything outside the declared schema.
//! - `solve`: the algorithm itself, a pure function of the instance.
//! - `render`: write the answer in the judge's output format.
//!
//! The catalog drives templates through the object-safe [`DynTemplate`],
//! which every `Template` gets for free.

use serde::Serialize;

use crate::category::Category;
use crate::error::InputError;
use crate::scanner::Scanner;

/// A self-contained solver for one judge problem.
///
/// Implementations hold no state: all working storage lives inside `solve`
/// and is dropped when it returns, so one value may serve concurrent callers.
pub trait Template {
    /// Typed input instance.
    type Input;

    /// Typed output instance.
    type Output;

    /// Static description: identifier, category, schemas and samples.
    fn info(&self) -> &'static TemplateInfo;

    /// Read an input instance.
    ///
    /// Must consume exactly the tokens the schema describes; the caller
    /// rejects anything left over.
    fn parse(&self, scanner: &mut Scanner<'_>) -> Result<Self::Input, InputError>;

    /// Compute the answer. Deterministic and total on parsed input.
    fn solve(&self, input: &Self::Input) -> Self::Output;

    /// Append the textual output to `out`.
    ///
    /// Tokens on a line are separated by one space and every line ends
    /// with `\n`.
    fn render(&self, output: &Self::Output, out: &mut String);
}

/// Object-safe view of a [`Template`], used by the catalog.
pub trait DynTemplate: Send + Sync {
    fn info(&self) -> &'static TemplateInfo;

    /// Parse, solve and render one instance.
    ///
    /// Output is only produced once `solve` has returned, so a failure never
    /// leaves partial output behind.
    fn run(&self, input: &str) -> Result<String, InputError>;
}

impl<T> DynTemplate for T
where
    T: Template + Send + Sync,
{
    fn info(&self) -> &'static TemplateInfo {
        Template::info(self)
    }

    fn run(&self, input: &str) -> Result<String, InputError> {
        let mut scanner = Scanner::new(input);
        let parsed = self.parse(&mut scanner)?;
        scanner.finish()?;
        let answer = self.solve(&parsed);
        let mut out = String::new();
        self.render(&answer, &mut out);
        Ok(out)
    }
}

/// Description of a template.
#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    /// Judge problem number, unique across the catalog.
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    /// Input fields in reading order.
    pub input: &'static [Field],
    /// Output fields in writing order.
    pub output: &'static [Field],
    /// Documented valid input domain. Values outside it are rejected.
    pub constraints: &'static [&'static str],
    pub samples: &'static [Sample],
}

impl TemplateInfo {
    /// Numeric value of the id, used for ordering.
    pub fn number(&self) -> u32 {
        self.id.parse().unwrap_or(u32::MAX)
    }
}

/// One input or output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub arity: Arity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Integer,
    Decimal,
    Word,
    Line,
}

/// How many times a field occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    One,
    /// Repeated as many times as the named size field (or product of sizes).
    Repeat(&'static str),
    /// Repeated until the given sentinel value is read.
    UntilSentinel(&'static str),
    /// Repeated until the end of input.
    UntilEnd,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            arity: Arity::One,
        }
    }

    pub const fn int(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    pub const fn decimal(name: &'static str) -> Self {
        Self::new(name, FieldKind::Decimal)
    }

    pub const fn word(name: &'static str) -> Self {
        Self::new(name, FieldKind::Word)
    }

    pub const fn line(name: &'static str) -> Self {
        Self::new(name, FieldKind::Line)
    }

    pub const fn repeat(mut self, size: &'static str) -> Self {
        self.arity = Arity::Repeat(size);
        self
    }

    pub const fn until(mut self, sentinel: &'static str) -> Self {
        self.arity = Arity::UntilSentinel(sentinel);
        self
    }

    pub const fn until_end(mut self) -> Self {
        self.arity = Arity::UntilEnd;
        self
    }
}

/// Input instance with its expected output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub input: &'static str,
    pub output: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler;

    static DOUBLER: TemplateInfo = TemplateInfo {
        id: "1",
        title: "Doubler",
        category: Category::Math,
        input: &[Field::int("n"), Field::int("a").repeat("n")],
        output: &[Field::int("b").repeat("n")],
        constraints: &["0 <= n <= 10"],
        samples: &[Sample {
            input: "2\n3 4\n",
            output: "6 8\n",
        }],
    };

    impl Template for Doubler {
        type Input = Vec<i64>;
        type Output = Vec<i64>;

        fn info(&self) -> &'static TemplateInfo {
            &DOUBLER
        }

        fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<i64>, InputError> {
            let n = sc.next_in("n", 0..=10usize)?;
            sc.values("a", n)
        }

        fn solve(&self, input: &Vec<i64>) -> Vec<i64> {
            input.iter().map(|x| x * 2).collect()
        }

        fn render(&self, output: &Vec<i64>, out: &mut String) {
            crate::utils::push_line(out, output);
        }
    }

    #[test]
    fn dyn_run_matches_sample() {
        let t: &dyn DynTemplate = &Doubler;
        let s = &t.info().samples[0];
        assert_eq!(t.run(s.input).unwrap(), s.output);
    }

    #[test]
    fn leftover_tokens_are_an_arity_error() {
        let err = DynTemplate::run(&Doubler, "1 5 6").unwrap_err();
        assert_eq!(err, InputError::Trailing { token: "6".into() });
    }

    #[test]
    fn schema_serialises() {
        let json = serde_json::to_value(&DOUBLER).unwrap();
        assert_eq!(json["category"], "math");
        assert_eq!(json["input"][1]["arity"]["repeat"], "n");
        assert_eq!(DOUBLER.number(), 1);
    }
}

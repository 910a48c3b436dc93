use anyhow::{Context, Result};
use bignum::BigInt;
use serde::Serialize;
use std::cmp::Ordering;

/// Every operation evaluated over one operand pair.
///
/// `quotient` is `None` when the right operand is zero; the report renders
/// that as a line of its own rather than failing.
#[derive(Serialize)]
pub struct Report {
    pub lhs: BigInt,
    pub rhs: BigInt,
    pub sum: BigInt,
    pub difference: BigInt,
    pub product: BigInt,
    pub quotient: Option<BigInt>,
    pub ordering: &'static str,
    pub equal: bool,
}

impl Report {
    pub fn build(lhs: &BigInt, rhs: &BigInt) -> Self {
        Report {
            lhs: lhs.clone(),
            rhs: rhs.clone(),
            sum: lhs + rhs,
            difference: lhs - rhs,
            product: lhs * rhs,
            quotient: lhs.div(rhs).ok(),
            ordering: match lhs.cmp(rhs) {
                Ordering::Less => "less than",
                Ordering::Equal => "equal to",
                Ordering::Greater => "greater than",
            },
            equal: lhs == rhs,
        }
    }

    /// Human-readable multi-line report.
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("{} + {} = {}", self.lhs, self.rhs, self.sum),
            format!("{} - {} = {}", self.lhs, self.rhs, self.difference),
            format!("{} * {} = {}", self.lhs, self.rhs, self.product),
        ];
        match &self.quotient {
            Some(q) => lines.push(format!("{} / {} = {}", self.lhs, self.rhs, q)),
            None => lines.push(format!(
                "{} / {} is undefined: division by zero",
                self.lhs, self.rhs
            )),
        }
        lines.push(format!("{} is {} {}", self.lhs, self.ordering, self.rhs));
        lines.push(format!("structurally equal: {}", self.equal));
        lines.join("\n")
    }
}

pub fn eval_command(lhs: &str, rhs: &str, json: bool) -> Result<()> {
    let a: BigInt = lhs
        .parse()
        .with_context(|| format!("left operand {lhs:?}"))?;
    let b: BigInt = rhs
        .parse()
        .with_context(|| format!("right operand {rhs:?}"))?;

    let report = Report::build(&a, &b);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render());
    }
    Ok(())
}

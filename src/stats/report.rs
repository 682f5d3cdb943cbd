//! Human-readable narrative for z-test results

use std::fmt;

use crate::stats::hypothesis::{round_to, TailDirection, ZTestSummary};

const RULE: &str = "-----------------";

/// Renders a [`ZTestSummary`] as the hypothesis / statistic / conclusion narrative
pub struct ZTestReport<'a> {
    summary: &'a ZTestSummary,
}

impl<'a> ZTestReport<'a> {
    pub fn new(summary: &'a ZTestSummary) -> Self {
        Self { summary }
    }

    /// Relational signs for H₀ and H₁
    fn hypothesis_signs(direction: TailDirection) -> (&'static str, &'static str) {
        match direction {
            TailDirection::LeftTailed => ("≥", "<"),
            TailDirection::RightTailed => ("≤", ">"),
            TailDirection::TwoTailed => ("=", "≠"),
        }
    }

    fn test_type(direction: TailDirection) -> &'static str {
        match direction {
            TailDirection::TwoTailed => "Two-tailed",
            TailDirection::LeftTailed => "Left-tailed",
            TailDirection::RightTailed => "Right-tailed",
        }
    }

    /// The closing sentence, phrased for the tail direction
    pub fn conclusion(&self) -> String {
        let s = self.summary;
        let rejected = s.result.rejected;
        let z = round_to(s.result.statistic, 4);
        let p = round_to(s.result.p_value, 4);
        let critical = s.critical_value;
        let verdict = if rejected { "reject" } else { "fail to reject" };
        let p_relation = if rejected { "less" } else { "greater" };

        let z_clause = match s.direction {
            TailDirection::TwoTailed => format!(
                "falls {} the critical region (from {} to {})",
                if rejected { "outside" } else { "within" },
                -critical,
                critical
            ),
            TailDirection::RightTailed => format!(
                "is {} than the critical value ({})",
                if rejected { "greater" } else { "less" },
                critical
            ),
            TailDirection::LeftTailed => format!(
                "is {} than the critical value ({})",
                if rejected { "less" } else { "greater" },
                critical
            ),
        };

        format!(
            "Since the calculated z-value ({}) {} and the p-value ({}) is {} than the \
             significance level ({}), we {} the null hypothesis.",
            z, z_clause, p, p_relation, s.significance_level, verdict
        )
    }
}

impl fmt::Display for ZTestReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.summary;
        let (null_sign, alt_sign) = Self::hypothesis_signs(s.direction);

        writeln!(f, "{}", RULE)?;
        writeln!(f, "Hypothesis:")?;
        writeln!(f, "H₀: µ {} {}", null_sign, s.hypothesized_mean)?;
        writeln!(f, "H₁: µ {} {}", alt_sign, s.hypothesized_mean)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Test type:")?;
        writeln!(f, "{} One-sample Z-test", Self::test_type(s.direction))?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Test statistic (Z-value):")?;
        writeln!(f, "{}", s.result.statistic)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "P-value:")?;
        writeln!(f, "{}", s.result.p_value)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Critical value:")?;
        writeln!(f, "{}", s.critical_value)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Conclusion:")?;
        writeln!(f, "{}", self.conclusion())?;
        write!(f, "{}", RULE)
    }
}

//! Canonical LP text emission.
//!
//! `Display` impls for the model types. Emission is canonical, not
//! lossless: trivia and original keyword spellings are gone, sections are
//! two-space indented, one declaration per line. What is preserved is
//! everything the model stores: term order, operator identity, signs,
//! infinities, name markers. Reparsing the emission yields a structurally
//! equal model.

use std::fmt;

use super::model::{
    Bound, Coefficient, ComparisonOperator, Constraint, ConstraintLabel, LinearExpression,
    Magnitude, Model, NameMarker, NumericValue, Objective, Sense, Sign, SosConstraint, SosType,
    VariableClass,
};

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sense::Minimize => f.write_str("Minimize"),
            Sense::Maximize => f.write_str("Maximize"),
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            f.write_str("-")?;
        }
        match self.magnitude {
            Magnitude::Finite(v) => write!(f, "{v}"),
            Magnitude::Infinite => f.write_str("inf"),
        }
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::Finite(v) => write!(f, "{v}"),
            Coefficient::Infinity(Sign::Positive) => f.write_str("inf"),
            Coefficient::Infinity(Sign::Negative) => f.write_str("-inf"),
        }
    }
}

impl fmt::Display for LinearExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.iter().enumerate() {
            if i == 0 {
                if term.sign == Sign::Negative {
                    // Keep the operator apart from an infinity lexeme:
                    // `-inf x` would re-lex as one signed-infinity token.
                    if term.coefficient.is_infinite() {
                        f.write_str("- ")?;
                    } else {
                        f.write_str("-")?;
                    }
                }
            } else {
                match term.sign {
                    Sign::Positive => f.write_str(" + ")?,
                    Sign::Negative => f.write_str(" - ")?,
                }
            }
            // A bare identifier reparses with coefficient 1.0, so the
            // coefficient is only written when it carries information.
            if term.coefficient != Coefficient::Finite(1.0) {
                write!(f, "{} ", term.coefficient)?;
            }
            f.write_str(&term.variable)?;
        }
        Ok(())
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name}: ")?;
        }
        write!(f, "{}", self.expression)
    }
}

impl fmt::Display for ConstraintLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.marker {
            NameMarker::Colon => write!(f, "{}:", self.name),
            NameMarker::DoubleColon => write!(f, "{}::", self.name),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{label} ")?;
        }
        write!(f, "{} {} {}", self.lhs, self.operator, self.rhs)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Free { variable } => write!(f, "{variable} free"),
            Bound::Range {
                lower,
                op1,
                variable,
                op2,
                upper,
            } => write!(f, "{lower} {op1} {variable} {op2} {upper}"),
            Bound::Lower {
                variable,
                op,
                value,
            } => write!(f, "{variable} {op} {value}"),
            Bound::Upper {
                value,
                op,
                variable,
            } => write!(f, "{value} {op} {variable}"),
        }
    }
}

impl fmt::Display for VariableClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableClass::Generals => f.write_str("Generals"),
            VariableClass::Integers => f.write_str("Integers"),
            VariableClass::Binaries => f.write_str("Binaries"),
            VariableClass::SemiContinuous => f.write_str("Semi-Continuous"),
        }
    }
}

impl fmt::Display for SosType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SosType::S1 => f.write_str("s1"),
            SosType::S2 => f.write_str("s2"),
        }
    }
}

impl fmt::Display for SosConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ::", self.name, self.sos_type)?;
        for entry in &self.entries {
            write!(f, "\n    {}: {}", entry.variable, entry.weight)?;
        }
        Ok(())
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.sense)?;
        for objective in &self.objectives {
            writeln!(f, "  {objective}")?;
        }
        writeln!(f, "Subject To")?;
        for constraint in &self.constraints {
            writeln!(f, "  {constraint}")?;
        }
        if !self.bounds.is_empty() {
            writeln!(f, "Bounds")?;
            for bound in &self.bounds {
                writeln!(f, "  {bound}")?;
            }
        }
        for (class, members) in &self.variable_classes {
            writeln!(f, "{class}")?;
            if !members.is_empty() {
                write!(f, " ")?;
                for name in members {
                    write!(f, " {name}")?;
                }
                writeln!(f)?;
            }
        }
        if !self.sos_constraints.is_empty() {
            writeln!(f, "SOS")?;
            for sos in &self.sos_constraints {
                writeln!(f, "  {sos}")?;
            }
        }
        if self.has_end_marker {
            writeln!(f, "End")?;
        }
        Ok(())
    }
}

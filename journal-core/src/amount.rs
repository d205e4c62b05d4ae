use std::fmt;

use rust_decimal::Decimal;
use typed_builder::TypedBuilder;

use super::Commodity;

/// A number of units of a certain commodity.
///
/// The commodity may be written before the number (`$ 100.00`) or after it (`100.00 EUR`);
/// only the commodity itself is kept, not the side it was written on.
#[derive(Clone, Debug, Eq, PartialEq, Hash, TypedBuilder)]
pub struct Amount<'a> {
    /// The value of the amount.
    pub number: Decimal,

    /// The commodity of the amount.
    #[builder(setter(into))]
    pub commodity: Commodity<'a>,
}

impl<'a> Amount<'a> {
    pub fn new<C: Into<Commodity<'a>>>(number: Decimal, commodity: C) -> Self {
        Amount {
            number,
            commodity: commodity.into(),
        }
    }
}

impl fmt::Display for Amount<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.commodity)
    }
}

//! Import tax estimate for a single entry.
//!
//! The duty is charged on the declared value plus freight. The value-added
//! tax is computed "by inside": its base already contains the tax itself,
//! hence the division by `1 - VAT_RATE`.

pub const IMPORT_DUTY_RATE: f64 = 0.60;
pub const VAT_RATE: f64 = 0.18;
pub const FINANCIAL_TAX_RATE: f64 = 0.0638;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TaxBreakdown {
    /// Price plus freight.
    pub base: f64,
    pub import_duty: f64,
    pub vat: f64,
    pub financial_tax: f64,
    /// Base plus every tax.
    pub total: f64,
}

impl TaxBreakdown {
    pub fn vat_and_financial(&self) -> f64 {
        self.vat + self.financial_tax
    }
}

/// Never fails: non-finite inputs count as 0, negative inputs pass through.
pub fn estimate_taxes(price: f64, freight: f64) -> TaxBreakdown {
    let base = finite_or_zero(price) + finite_or_zero(freight);
    let import_duty = base * IMPORT_DUTY_RATE;
    let vat_base = (base + import_duty) / (1.0 - VAT_RATE);
    let vat = vat_base * VAT_RATE;
    let financial_tax = base * FINANCIAL_TAX_RATE;
    let total = base + import_duty + vat + financial_tax;

    TaxBreakdown {
        base,
        import_duty,
        vat,
        financial_tax,
        total,
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

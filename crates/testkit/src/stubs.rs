//! Canonical domain-object stubs shared by the test suites
//!
//! Factories read only the immutable templates below and allocate a fresh
//! value per call, so tests may freely mutate what they receive. Collaborator
//! validation is not caught here: a literal that fails `kestrel-core`'s rules
//! is a defect in the stub data and aborts the test run with a panic naming
//! the broken stub.

use chrono::{DateTime, Duration, Utc};
use lazy_static::lazy_static;
use rstest::fixture;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use kestrel_core::{
    Bar, BarSpecification, BarType, Currency, Instrument, InstrumentId, Price, Quantity,
    QuoteType, Resolution, SecurityType, Symbol, Venue,
};

/// Unix epoch: 00:00:00 UTC on 1 January 1970, the reference instant every
/// stub timestamp builds on.
pub const UNIX_EPOCH: DateTime<Utc> = DateTime::UNIX_EPOCH;

lazy_static! {
    /// AUD/USD on FXCM, shared by every stub referencing the pair.
    pub static ref AUDUSD_FXCM: Symbol = stub_symbol("AUDUSD");
    /// GBP/USD on FXCM, shared by every stub referencing the pair.
    pub static ref GBPUSD_FXCM: Symbol = stub_symbol("GBPUSD");
    /// USD/JPY on FXCM, shared by every stub referencing the pair.
    pub static ref USDJPY_FXCM: Symbol = stub_symbol("USDJPY");
}

pub const ONE_MINUTE_BID: BarSpecification =
    BarSpecification::new(1, Resolution::Minute, QuoteType::Bid);
pub const ONE_MINUTE_ASK: BarSpecification =
    BarSpecification::new(1, Resolution::Minute, QuoteType::Ask);
pub const ONE_MINUTE_MID: BarSpecification =
    BarSpecification::new(1, Resolution::Minute, QuoteType::Mid);
pub const ONE_SECOND_MID: BarSpecification =
    BarSpecification::new(1, Resolution::Second, QuoteType::Mid);

/// Unix epoch shifted by the given offset in minutes.
///
/// Pure function of its argument: equal offsets always yield equal instants.
/// As a fixture the offset defaults to zero; override with `#[with(mins)]`.
#[fixture]
pub fn unix_epoch(#[default(0)] offset_mins: i64) -> DateTime<Utc> {
    UNIX_EPOCH + Duration::minutes(offset_mins)
}

// ---- Instruments ----

/// AUD/USD on FXCM with standard 5-decimal FX conventions.
#[fixture]
pub fn instrument_audusd() -> Instrument {
    fx_instrument(&AUDUSD_FXCM, "AUD/USD", Currency::Usd, 5, dec!(0.00001))
}

/// GBP/USD on FXCM with standard 5-decimal FX conventions.
#[fixture]
pub fn instrument_gbpusd() -> Instrument {
    fx_instrument(&GBPUSD_FXCM, "GBP/USD", Currency::Usd, 5, dec!(0.00001))
}

/// USD/JPY on FXCM with the yen pairs' 3-decimal convention.
#[fixture]
pub fn instrument_usdjpy() -> Instrument {
    fx_instrument(&USDJPY_FXCM, "USD/JPY", Currency::Jpy, 3, dec!(0.001))
}

// ---- Bar types ----

#[fixture]
pub fn bartype_audusd_1min_bid() -> BarType {
    BarType::new(AUDUSD_FXCM.clone(), ONE_MINUTE_BID)
}

#[fixture]
pub fn bartype_audusd_1min_ask() -> BarType {
    BarType::new(AUDUSD_FXCM.clone(), ONE_MINUTE_ASK)
}

#[fixture]
pub fn bartype_gbpusd_1min_bid() -> BarType {
    BarType::new(GBPUSD_FXCM.clone(), ONE_MINUTE_BID)
}

#[fixture]
pub fn bartype_gbpusd_1min_ask() -> BarType {
    BarType::new(GBPUSD_FXCM.clone(), ONE_MINUTE_ASK)
}

#[fixture]
pub fn bartype_gbpusd_1sec_mid() -> BarType {
    BarType::new(GBPUSD_FXCM.clone(), ONE_SECOND_MID)
}

#[fixture]
pub fn bartype_usdjpy_1min_bid() -> BarType {
    BarType::new(USDJPY_FXCM.clone(), ONE_MINUTE_BID)
}

#[fixture]
pub fn bartype_usdjpy_1min_ask() -> BarType {
    BarType::new(USDJPY_FXCM.clone(), ONE_MINUTE_ASK)
}

// ---- Bars ----

/// A 5-decimal bar stamped at the epoch, priced like a dollar pair.
#[fixture]
pub fn bar_5decimal() -> Bar {
    Bar::new(
        stub_price(dec!(1.00002)),
        stub_price(dec!(1.00004)),
        stub_price(dec!(1.00001)),
        stub_price(dec!(1.00003)),
        Quantity::new(100_000),
        UNIX_EPOCH,
    )
    .expect("5-decimal stub bar must satisfy OHLC validation")
}

/// A 3-decimal bar stamped at the epoch, priced like a yen pair.
#[fixture]
pub fn bar_3decimal() -> Bar {
    Bar::new(
        stub_price(dec!(90.002)),
        stub_price(dec!(90.004)),
        stub_price(dec!(90.001)),
        stub_price(dec!(90.003)),
        Quantity::new(100_000),
        UNIX_EPOCH,
    )
    .expect("3-decimal stub bar must satisfy OHLC validation")
}

// ---- Literal helpers ----

fn stub_symbol(code: &str) -> Symbol {
    Symbol::new(code, Venue::Fxcm).expect("stub symbol codes are valid tickers")
}

fn stub_price(value: Decimal) -> Price {
    Price::new(value).expect("stub prices are positive literals")
}

fn fx_instrument(
    symbol: &Symbol,
    broker_symbol: &str,
    quote_currency: Currency,
    tick_precision: u8,
    tick_size: Decimal,
) -> Instrument {
    Instrument::new(
        InstrumentId::from(symbol),
        symbol.clone(),
        broker_symbol,
        quote_currency,
        SecurityType::Forex,
        tick_precision,
        tick_size,
        Quantity::new(1_000),
        dec!(0),
        dec!(0),
        dec!(0),
        dec!(0),
        Quantity::new(1),
        Quantity::new(50_000_000),
        dec!(0),
        dec!(0),
        UNIX_EPOCH,
    )
    .expect("stub instrument literals must pass instrument validation")
}

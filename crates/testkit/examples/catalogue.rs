//! Stub catalogue walk-through
//!
//! Logs every fixture the kit provides, with the field values a test would
//! observe. Run with `cargo run -p kestrel-testkit --example catalogue`.

use kestrel_testkit::*;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Reference instant:  {}", unix_epoch(0));
    log::info!("Shifted +90 mins:   {}", unix_epoch(90));

    for symbol in [&*AUDUSD_FXCM, &*GBPUSD_FXCM, &*USDJPY_FXCM] {
        log::info!("Symbol template:    {}", symbol);
    }

    for spec in [ONE_MINUTE_BID, ONE_MINUTE_ASK, ONE_MINUTE_MID, ONE_SECOND_MID] {
        log::info!("Bar specification:  {}", spec);
    }

    for instrument in [instrument_audusd(), instrument_gbpusd(), instrument_usdjpy()] {
        log::info!(
            "Instrument {}: tick_size={} precision={} trade sizes {}..{}",
            instrument.id,
            instrument.tick_size,
            instrument.tick_precision,
            instrument.min_trade_size,
            instrument.max_trade_size
        );
    }

    for bar_type in [
        bartype_audusd_1min_bid(),
        bartype_audusd_1min_ask(),
        bartype_gbpusd_1min_bid(),
        bartype_gbpusd_1min_ask(),
        bartype_gbpusd_1sec_mid(),
        bartype_usdjpy_1min_bid(),
        bartype_usdjpy_1min_ask(),
    ] {
        log::info!("Bar type:           {}", bar_type);
    }

    log::info!("5-decimal bar:      {}", bar_5decimal());
    log::info!("3-decimal bar:      {}", bar_3decimal());
}

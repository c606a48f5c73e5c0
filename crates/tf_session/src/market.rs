use rand::Rng;

use tf_core::MarketSnapshot;

/// One step of the simulated ticker. Prices random-walk around their last
/// value; the change percentages are redrawn each tick. The driver is
/// external (a 30 s interval task in the server), not this crate.
pub fn tick_market(snapshot: &mut MarketSnapshot, rng: &mut impl Rng) {
    snapshot.spy.price += (rng.gen::<f64>() - 0.5) * 2.0;
    snapshot.spy.change = round2(rng.gen::<f64>() * 3.0 - 1.0);

    snapshot.btc.price += (rng.gen::<f64>() - 0.5) * 200.0;
    snapshot.btc.change = round2(rng.gen::<f64>() * 5.0 - 2.0);

    snapshot.eth.price += (rng.gen::<f64>() - 0.5) * 50.0;
    snapshot.eth.change = round2(rng.gen::<f64>() * 4.0 - 1.5);
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

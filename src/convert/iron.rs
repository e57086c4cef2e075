// src/convert/iron.rs
use std::collections::HashMap;

use crate::model::KillRate;

/// Ironman kill rates are only occasionally updated on the site, so they lag
/// behind main. An ironman can never kill faster than a main: cap each shared
/// boss at the main rate. Bosses main doesn't list pass through.
pub fn correct_iron_rates(main: &[KillRate], iron: &[KillRate]) -> Vec<KillRate> {
    let mut main_rates: HashMap<&str, f64> = HashMap::with_capacity(main.len());
    for entry in main {
        // first listing wins
        main_rates.entry(entry.name.as_str()).or_insert(entry.rate);
    }

    iron.iter()
        .map(|entry| match main_rates.get(entry.name.as_str()) {
            Some(&main_rate) => KillRate::new(entry.name.clone(), entry.rate.min(main_rate)),
            None => entry.clone(),
        })
        .collect()
}

/// F2P and level-3 accounts have no boss rates of their own: same bosses, zero rate.
pub fn zeroed_rates(main: &[KillRate]) -> Vec<KillRate> {
    main.iter().map(|e| KillRate::new(e.name.clone(), 0.0)).collect()
}

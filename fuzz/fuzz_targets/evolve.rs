#![no_main]

use libfuzzer_sys::fuzz_target;
use rhizome_resin_wolfram::{
    Boundary, ElementaryRule, RunConfig, TotalisticRule, elementary_1d, step, totalistic_1d,
};

fuzz_target!(|data: &[u8]| {
    // Arbitrary rows and identifiers must either run or return an error, never panic.
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Some((&id, row)) = rest.split_first() else {
        return;
    };

    let boundary = match selector % 3 {
        0 => Boundary::Reflect,
        1 => Boundary::Wrap,
        _ => Boundary::Constant(selector / 3 % 4),
    };
    let config = RunConfig::new((selector as usize) % 16)
        .with_boundary(boundary)
        .with_initial_row(row.iter().map(|b| b % 4).collect());

    if selector & 0x80 == 0 {
        let _ = elementary_1d(id, &config);
        let _ = step(&ElementaryRule::new(id), row, boundary);
    } else {
        let code = (id as u32) * 9 + (selector as u32 & 0x7f);
        let _ = totalistic_1d(code, &config);
        if let Ok(rule) = TotalisticRule::new(code) {
            let _ = step(&rule, row, boundary);
        }
    }
});

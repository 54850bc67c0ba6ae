//! Benchmark utilities.

use rand::Rng;

/// Generate `count` random integers.
pub fn random_values(count: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen()).collect()
}

/// Transform that fails on roughly `1 / every` of the inputs.
pub fn fail_every(every: i64) -> impl FnMut(&i64) -> Result<i64, String> + Clone {
    move |v| {
        if v.rem_euclid(every) == 0 {
            Err(format!("rejected {v}"))
        } else {
            Ok(v.wrapping_mul(2))
        }
    }
}

/// Generate a tab-separated `id:int,name:text,score:float` table where
/// roughly `bad_ratio` of the rows carry a malformed score.
pub fn random_table(rows: usize, bad_ratio: f64) -> String {
    let mut rng = rand::thread_rng();
    let mut text = String::from("id\tname\tscore\n");
    for i in 0..rows {
        let score = if rng.gen_bool(bad_ratio) {
            "n/a".to_string()
        } else {
            format!("{:.2}", rng.gen_range(0.0..100.0))
        };
        text.push_str(&format!("{i}\tuser{i}\t{score}\n"));
    }
    text
}

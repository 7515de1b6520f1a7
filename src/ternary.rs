// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// My ternary expression handler.  `cargo fmt` splits an `if`
/// expression over five lines, and the border rules of seam carving
/// (first line, last position, missing neighbor) read much better as
/// a table of one-liners.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn picks_the_right_arm() {
        assert_eq!(cq!(1 < 2, "yes", "no"), "yes");
        assert_eq!(cq!(2 < 1, "yes", "no"), "no");
    }
}

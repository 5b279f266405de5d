pub static LIGHTEN_HELP: &str = "Lighten an image

Adds AMOUNT to every red, green and blue value.
Values never go past the maximum declared in the file header,
they stop there instead of wrapping around.

Without AMOUNT a fixed step of 50 is used.";

pub static DARKEN_HELP: &str = "Darken an image

Subtracts AMOUNT from every red, green and blue value.
Values stop at zero instead of wrapping around.

Without AMOUNT a fixed step of 50 is used.";

pub static OPERATIONS_ORDER_HELP: &str = "Operations run in the order they appear on the command line
and may be repeated, e.g `--lighten 20 --darken 5 --lighten`";

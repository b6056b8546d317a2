pub static THRESHOLD_HELP: &str = "Channel difference between 1.0 and 10.0

A pixel is replaced when its screen channel divided by each of the
other two channels is greater than this value.

A channel of 0 counts as infinitely smaller, so a pixel like 5,0,0
is always replaced when the screen channel is r";

pub static STRICT_HELP: &str = "Reject malformed images

By default a value not followed by a space at the end of a line, and
values that do not form a whole pixel, are dropped silently.
With this flag they are errors, as are a magic line other than P3,
a maximum value other than 255, and pixel data that does not match the
width and height in the header.";

pub static PROMPT_HELP: &str = "Parameters not given on the command line are asked for interactively.

An existing output file is only replaced after answering y when asked.
Pass -y/--yes to replace it without asking, e.g. when stdin is not a terminal.";

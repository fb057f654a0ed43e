/// Candidate strings for the lookup benchmarks.
///
/// Short tokens come first, long sentences next, and the target sits in the
/// last slot so every strategy walks the full list before it matches.
pub const HAYSTACK: &[&str] = &[
    "a", "b", "c",
    "1", "2", "3",
    "abc", "123",

    "if", "else if", "else", "break", "continue", "for", "while", "do",
    "goto", "struct", "int", "float", "unsigned", "double", "char", "const",
    "cpu", "gpu", "memory", "keyboard", "screen", "mouse", "template",
    "compiler", "type", "class", "jaffa cake", "then", "reduce", "reuse",
    "recycle", "black cats", "kiteboard", "surfboard", "skateboard",
    "wakeboard", "wobbleboard", "breadboard",

    "A really long string that takes up space",
    "This is also a longer string that takes up space, time, and sugar",
    "Everybody jump jump! Everybody jump jump jump jump jump jump!",
    "Flowers with purple spots, bannanas and apples",

    "needle",
];

pub const NEEDLE: &str = "needle";

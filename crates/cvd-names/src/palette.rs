//! CSS3 extended color keywords.
//!
//! One entry per distinct RGB value, sorted by name. Where the keyword list
//! has several spellings for the same value (`aqua`/`cyan`,
//! `fuchsia`/`magenta`, the `gray`/`grey` pairs) only the alphabetically last
//! one is kept.

use cvd_core::Rgb8;

/// Number of entries in [`PALETTE`].
pub const PALETTE_LEN: usize = 138;

/// `(name, color)` pairs in lookup order.
#[rustfmt::skip]
pub const PALETTE: [(&str, Rgb8); PALETTE_LEN] = [
    ("aliceblue", Rgb8::new(240, 248, 255)),
    ("antiquewhite", Rgb8::new(250, 235, 215)),
    ("aquamarine", Rgb8::new(127, 255, 212)),
    ("azure", Rgb8::new(240, 255, 255)),
    ("beige", Rgb8::new(245, 245, 220)),
    ("bisque", Rgb8::new(255, 228, 196)),
    ("black", Rgb8::new(0, 0, 0)),
    ("blanchedalmond", Rgb8::new(255, 235, 205)),
    ("blue", Rgb8::new(0, 0, 255)),
    ("blueviolet", Rgb8::new(138, 43, 226)),
    ("brown", Rgb8::new(165, 42, 42)),
    ("burlywood", Rgb8::new(222, 184, 135)),
    ("cadetblue", Rgb8::new(95, 158, 160)),
    ("chartreuse", Rgb8::new(127, 255, 0)),
    ("chocolate", Rgb8::new(210, 105, 30)),
    ("coral", Rgb8::new(255, 127, 80)),
    ("cornflowerblue", Rgb8::new(100, 149, 237)),
    ("cornsilk", Rgb8::new(255, 248, 220)),
    ("crimson", Rgb8::new(220, 20, 60)),
    ("cyan", Rgb8::new(0, 255, 255)),
    ("darkblue", Rgb8::new(0, 0, 139)),
    ("darkcyan", Rgb8::new(0, 139, 139)),
    ("darkgoldenrod", Rgb8::new(184, 134, 11)),
    ("darkgreen", Rgb8::new(0, 100, 0)),
    ("darkgrey", Rgb8::new(169, 169, 169)),
    ("darkkhaki", Rgb8::new(189, 183, 107)),
    ("darkmagenta", Rgb8::new(139, 0, 139)),
    ("darkolivegreen", Rgb8::new(85, 107, 47)),
    ("darkorange", Rgb8::new(255, 140, 0)),
    ("darkorchid", Rgb8::new(153, 50, 204)),
    ("darkred", Rgb8::new(139, 0, 0)),
    ("darksalmon", Rgb8::new(233, 150, 122)),
    ("darkseagreen", Rgb8::new(143, 188, 143)),
    ("darkslateblue", Rgb8::new(72, 61, 139)),
    ("darkslategrey", Rgb8::new(47, 79, 79)),
    ("darkturquoise", Rgb8::new(0, 206, 209)),
    ("darkviolet", Rgb8::new(148, 0, 211)),
    ("deeppink", Rgb8::new(255, 20, 147)),
    ("deepskyblue", Rgb8::new(0, 191, 255)),
    ("dimgrey", Rgb8::new(105, 105, 105)),
    ("dodgerblue", Rgb8::new(30, 144, 255)),
    ("firebrick", Rgb8::new(178, 34, 34)),
    ("floralwhite", Rgb8::new(255, 250, 240)),
    ("forestgreen", Rgb8::new(34, 139, 34)),
    ("gainsboro", Rgb8::new(220, 220, 220)),
    ("ghostwhite", Rgb8::new(248, 248, 255)),
    ("gold", Rgb8::new(255, 215, 0)),
    ("goldenrod", Rgb8::new(218, 165, 32)),
    ("green", Rgb8::new(0, 128, 0)),
    ("greenyellow", Rgb8::new(173, 255, 47)),
    ("grey", Rgb8::new(128, 128, 128)),
    ("honeydew", Rgb8::new(240, 255, 240)),
    ("hotpink", Rgb8::new(255, 105, 180)),
    ("indianred", Rgb8::new(205, 92, 92)),
    ("indigo", Rgb8::new(75, 0, 130)),
    ("ivory", Rgb8::new(255, 255, 240)),
    ("khaki", Rgb8::new(240, 230, 140)),
    ("lavender", Rgb8::new(230, 230, 250)),
    ("lavenderblush", Rgb8::new(255, 240, 245)),
    ("lawngreen", Rgb8::new(124, 252, 0)),
    ("lemonchiffon", Rgb8::new(255, 250, 205)),
    ("lightblue", Rgb8::new(173, 216, 230)),
    ("lightcoral", Rgb8::new(240, 128, 128)),
    ("lightcyan", Rgb8::new(224, 255, 255)),
    ("lightgoldenrodyellow", Rgb8::new(250, 250, 210)),
    ("lightgreen", Rgb8::new(144, 238, 144)),
    ("lightgrey", Rgb8::new(211, 211, 211)),
    ("lightpink", Rgb8::new(255, 182, 193)),
    ("lightsalmon", Rgb8::new(255, 160, 122)),
    ("lightseagreen", Rgb8::new(32, 178, 170)),
    ("lightskyblue", Rgb8::new(135, 206, 250)),
    ("lightslategrey", Rgb8::new(119, 136, 153)),
    ("lightsteelblue", Rgb8::new(176, 196, 222)),
    ("lightyellow", Rgb8::new(255, 255, 224)),
    ("lime", Rgb8::new(0, 255, 0)),
    ("limegreen", Rgb8::new(50, 205, 50)),
    ("linen", Rgb8::new(250, 240, 230)),
    ("magenta", Rgb8::new(255, 0, 255)),
    ("maroon", Rgb8::new(128, 0, 0)),
    ("mediumaquamarine", Rgb8::new(102, 205, 170)),
    ("mediumblue", Rgb8::new(0, 0, 205)),
    ("mediumorchid", Rgb8::new(186, 85, 211)),
    ("mediumpurple", Rgb8::new(147, 112, 219)),
    ("mediumseagreen", Rgb8::new(60, 179, 113)),
    ("mediumslateblue", Rgb8::new(123, 104, 238)),
    ("mediumspringgreen", Rgb8::new(0, 250, 154)),
    ("mediumturquoise", Rgb8::new(72, 209, 204)),
    ("mediumvioletred", Rgb8::new(199, 21, 133)),
    ("midnightblue", Rgb8::new(25, 25, 112)),
    ("mintcream", Rgb8::new(245, 255, 250)),
    ("mistyrose", Rgb8::new(255, 228, 225)),
    ("moccasin", Rgb8::new(255, 228, 181)),
    ("navajowhite", Rgb8::new(255, 222, 173)),
    ("navy", Rgb8::new(0, 0, 128)),
    ("oldlace", Rgb8::new(253, 245, 230)),
    ("olive", Rgb8::new(128, 128, 0)),
    ("olivedrab", Rgb8::new(107, 142, 35)),
    ("orange", Rgb8::new(255, 165, 0)),
    ("orangered", Rgb8::new(255, 69, 0)),
    ("orchid", Rgb8::new(218, 112, 214)),
    ("palegoldenrod", Rgb8::new(238, 232, 170)),
    ("palegreen", Rgb8::new(152, 251, 152)),
    ("paleturquoise", Rgb8::new(175, 238, 238)),
    ("palevioletred", Rgb8::new(219, 112, 147)),
    ("papayawhip", Rgb8::new(255, 239, 213)),
    ("peachpuff", Rgb8::new(255, 218, 185)),
    ("peru", Rgb8::new(205, 133, 63)),
    ("pink", Rgb8::new(255, 192, 203)),
    ("plum", Rgb8::new(221, 160, 221)),
    ("powderblue", Rgb8::new(176, 224, 230)),
    ("purple", Rgb8::new(128, 0, 128)),
    ("red", Rgb8::new(255, 0, 0)),
    ("rosybrown", Rgb8::new(188, 143, 143)),
    ("royalblue", Rgb8::new(65, 105, 225)),
    ("saddlebrown", Rgb8::new(139, 69, 19)),
    ("salmon", Rgb8::new(250, 128, 114)),
    ("sandybrown", Rgb8::new(244, 164, 96)),
    ("seagreen", Rgb8::new(46, 139, 87)),
    ("seashell", Rgb8::new(255, 245, 238)),
    ("sienna", Rgb8::new(160, 82, 45)),
    ("silver", Rgb8::new(192, 192, 192)),
    ("skyblue", Rgb8::new(135, 206, 235)),
    ("slateblue", Rgb8::new(106, 90, 205)),
    ("slategrey", Rgb8::new(112, 128, 144)),
    ("snow", Rgb8::new(255, 250, 250)),
    ("springgreen", Rgb8::new(0, 255, 127)),
    ("steelblue", Rgb8::new(70, 130, 180)),
    ("tan", Rgb8::new(210, 180, 140)),
    ("teal", Rgb8::new(0, 128, 128)),
    ("thistle", Rgb8::new(216, 191, 216)),
    ("tomato", Rgb8::new(255, 99, 71)),
    ("turquoise", Rgb8::new(64, 224, 208)),
    ("violet", Rgb8::new(238, 130, 238)),
    ("wheat", Rgb8::new(245, 222, 179)),
    ("white", Rgb8::new(255, 255, 255)),
    ("whitesmoke", Rgb8::new(245, 245, 245)),
    ("yellow", Rgb8::new(255, 255, 0)),
    ("yellowgreen", Rgb8::new(154, 205, 50)),
];

//! Built-in colour family dictionaries.
//!
//! Names are lower-case. Multi-word names appear in both spaced and joined
//! form where the family traditionally spells them both ways.

use super::Family;
use crate::colour::Colour;

/// Built-in families in registration order.
pub(super) const TABLES: &[(Family, &[(&str, Colour)])] = &[
    (Family::STANDARD, STANDARD),
    (Family::WEB, WEB),
    (Family::X11, X11),
    (Family::CGA, CGA),
    (Family::CRAYOLA, CRAYOLA),
    (Family::PANTONE, PANTONE),
    (Family::FARROW_AND_BALL, FARROW_AND_BALL),
];

/// Everyday names with web values. The default family.
const STANDARD: &[(&str, Colour)] = &[
    ("aqua", Colour::rgb(0, 255, 255)),
    ("black", Colour::rgb(0, 0, 0)),
    ("blue", Colour::rgb(0, 0, 255)),
    ("brown", Colour::rgb(165, 42, 42)),
    ("cyan", Colour::rgb(0, 255, 255)),
    ("dark blue", Colour::rgb(0, 0, 139)),
    ("dark green", Colour::rgb(0, 100, 0)),
    ("dark grey", Colour::rgb(169, 169, 169)),
    ("dark red", Colour::rgb(139, 0, 0)),
    ("darkblue", Colour::rgb(0, 0, 139)),
    ("darkgreen", Colour::rgb(0, 100, 0)),
    ("darkgrey", Colour::rgb(169, 169, 169)),
    ("darkred", Colour::rgb(139, 0, 0)),
    ("forest green", Colour::rgb(34, 139, 34)),
    ("forestgreen", Colour::rgb(34, 139, 34)),
    ("fuchsia", Colour::rgb(255, 0, 255)),
    ("gold", Colour::rgb(255, 215, 0)),
    ("gray", Colour::rgb(128, 128, 128)),
    ("green", Colour::rgb(0, 128, 0)),
    ("grey", Colour::rgb(128, 128, 128)),
    ("indigo", Colour::rgb(75, 0, 130)),
    ("lawn green", Colour::rgb(124, 252, 0)),
    ("lawngreen", Colour::rgb(124, 252, 0)),
    ("light blue", Colour::rgb(173, 216, 230)),
    ("light green", Colour::rgb(144, 238, 144)),
    ("light grey", Colour::rgb(211, 211, 211)),
    ("lightblue", Colour::rgb(173, 216, 230)),
    ("lightgreen", Colour::rgb(144, 238, 144)),
    ("lightgrey", Colour::rgb(211, 211, 211)),
    ("lime", Colour::rgb(0, 255, 0)),
    ("lime green", Colour::rgb(50, 205, 50)),
    ("limegreen", Colour::rgb(50, 205, 50)),
    ("low green", Colour::rgb(96, 128, 56)),
    ("magenta", Colour::rgb(255, 0, 255)),
    ("maroon", Colour::rgb(128, 0, 0)),
    ("navy", Colour::rgb(0, 0, 128)),
    ("navy blue", Colour::rgb(0, 0, 128)),
    ("navyblue", Colour::rgb(0, 0, 128)),
    ("olive", Colour::rgb(128, 128, 0)),
    ("orange", Colour::rgb(255, 165, 0)),
    ("pink", Colour::rgb(255, 192, 203)),
    ("purple", Colour::rgb(128, 0, 128)),
    ("red", Colour::rgb(255, 0, 0)),
    ("sea green", Colour::rgb(46, 139, 87)),
    ("seagreen", Colour::rgb(46, 139, 87)),
    ("silver", Colour::rgb(192, 192, 192)),
    ("sky blue", Colour::rgb(135, 206, 235)),
    ("skyblue", Colour::rgb(135, 206, 235)),
    ("teal", Colour::rgb(0, 128, 128)),
    ("transparent", Colour::rgba(0, 0, 0, 0)),
    ("violet", Colour::rgb(238, 130, 238)),
    ("white", Colour::rgb(255, 255, 255)),
    ("yellow", Colour::rgb(255, 255, 0)),
];

/// CSS named colours.
const WEB: &[(&str, Colour)] = &[
    ("aliceblue", Colour::rgb(240, 248, 255)),
    ("antiquewhite", Colour::rgb(250, 235, 215)),
    ("aqua", Colour::rgb(0, 255, 255)),
    ("aquamarine", Colour::rgb(127, 255, 212)),
    ("azure", Colour::rgb(240, 255, 255)),
    ("beige", Colour::rgb(245, 245, 220)),
    ("bisque", Colour::rgb(255, 228, 196)),
    ("black", Colour::rgb(0, 0, 0)),
    ("blanchedalmond", Colour::rgb(255, 235, 205)),
    ("blue", Colour::rgb(0, 0, 255)),
    ("blueviolet", Colour::rgb(138, 43, 226)),
    ("brown", Colour::rgb(165, 42, 42)),
    ("burlywood", Colour::rgb(222, 184, 135)),
    ("cadetblue", Colour::rgb(95, 158, 160)),
    ("chartreuse", Colour::rgb(127, 255, 0)),
    ("chocolate", Colour::rgb(210, 105, 30)),
    ("coral", Colour::rgb(255, 127, 80)),
    ("cornflowerblue", Colour::rgb(100, 149, 237)),
    ("cornsilk", Colour::rgb(255, 248, 220)),
    ("crimson", Colour::rgb(220, 20, 60)),
    ("cyan", Colour::rgb(0, 255, 255)),
    ("darkblue", Colour::rgb(0, 0, 139)),
    ("darkcyan", Colour::rgb(0, 139, 139)),
    ("darkgoldenrod", Colour::rgb(184, 134, 11)),
    ("darkgray", Colour::rgb(169, 169, 169)),
    ("darkgreen", Colour::rgb(0, 100, 0)),
    ("darkgrey", Colour::rgb(169, 169, 169)),
    ("darkkhaki", Colour::rgb(189, 183, 107)),
    ("darkmagenta", Colour::rgb(139, 0, 139)),
    ("darkolivegreen", Colour::rgb(85, 107, 47)),
    ("darkorange", Colour::rgb(255, 140, 0)),
    ("darkorchid", Colour::rgb(153, 50, 204)),
    ("darkred", Colour::rgb(139, 0, 0)),
    ("darksalmon", Colour::rgb(233, 150, 122)),
    ("darkseagreen", Colour::rgb(143, 188, 139)),
    ("darkslateblue", Colour::rgb(72, 61, 139)),
    ("darkslategray", Colour::rgb(47, 79, 79)),
    ("darkslategrey", Colour::rgb(47, 79, 79)),
    ("darkturquoise", Colour::rgb(0, 206, 209)),
    ("darkviolet", Colour::rgb(148, 0, 211)),
    ("deeppink", Colour::rgb(255, 20, 147)),
    ("deepskyblue", Colour::rgb(0, 191, 255)),
    ("dimgray", Colour::rgb(105, 105, 105)),
    ("dimgrey", Colour::rgb(105, 105, 105)),
    ("dodgerblue", Colour::rgb(30, 144, 255)),
    ("firebrick", Colour::rgb(178, 34, 34)),
    ("floralwhite", Colour::rgb(255, 250, 240)),
    ("forestgreen", Colour::rgb(34, 139, 34)),
    ("fuchsia", Colour::rgb(255, 0, 255)),
    ("gainsboro", Colour::rgb(220, 220, 220)),
    ("ghostwhite", Colour::rgb(248, 248, 255)),
    ("gold", Colour::rgb(255, 215, 0)),
    ("goldenrod", Colour::rgb(218, 165, 32)),
    ("gray", Colour::rgb(128, 128, 128)),
    ("green", Colour::rgb(0, 128, 0)),
    ("greenyellow", Colour::rgb(173, 255, 47)),
    ("grey", Colour::rgb(128, 128, 128)),
    ("honeydew", Colour::rgb(240, 255, 240)),
    ("hotpink", Colour::rgb(255, 105, 180)),
    ("indianred", Colour::rgb(205, 92, 92)),
    ("indigo", Colour::rgb(75, 0, 130)),
    ("ivory", Colour::rgb(255, 255, 240)),
    ("khaki", Colour::rgb(240, 230, 140)),
    ("lavender", Colour::rgb(230, 230, 250)),
    ("lavenderblush", Colour::rgb(255, 240, 245)),
    ("lawngreen", Colour::rgb(124, 252, 0)),
    ("lemonchiffon", Colour::rgb(255, 250, 205)),
    ("lightblue", Colour::rgb(173, 216, 230)),
    ("lightcoral", Colour::rgb(240, 128, 128)),
    ("lightcyan", Colour::rgb(224, 255, 255)),
    ("lightgoldenrodyellow", Colour::rgb(250, 250, 210)),
    ("lightgray", Colour::rgb(211, 211, 211)),
    ("lightgreen", Colour::rgb(144, 238, 144)),
    ("lightgrey", Colour::rgb(211, 211, 211)),
    ("lightpink", Colour::rgb(255, 182, 193)),
    ("lightsalmon", Colour::rgb(255, 160, 122)),
    ("lightseagreen", Colour::rgb(32, 178, 170)),
    ("lightskyblue", Colour::rgb(135, 206, 250)),
    ("lightslategray", Colour::rgb(119, 136, 153)),
    ("lightslategrey", Colour::rgb(119, 136, 153)),
    ("lightsteelblue", Colour::rgb(176, 196, 222)),
    ("lightyellow", Colour::rgb(255, 255, 224)),
    ("lime", Colour::rgb(0, 255, 0)),
    ("limegreen", Colour::rgb(50, 205, 50)),
    ("linen", Colour::rgb(250, 240, 230)),
    ("magenta", Colour::rgb(255, 0, 255)),
    ("maroon", Colour::rgb(128, 0, 0)),
    ("mediumaquamarine", Colour::rgb(102, 205, 170)),
    ("mediumblue", Colour::rgb(0, 0, 205)),
    ("mediumorchid", Colour::rgb(186, 85, 211)),
    ("mediumpurple", Colour::rgb(147, 112, 219)),
    ("mediumseagreen", Colour::rgb(60, 179, 113)),
    ("mediumslateblue", Colour::rgb(123, 104, 238)),
    ("mediumspringgreen", Colour::rgb(0, 250, 154)),
    ("mediumturquoise", Colour::rgb(72, 209, 204)),
    ("mediumvioletred", Colour::rgb(199, 21, 133)),
    ("midnightblue", Colour::rgb(25, 25, 112)),
    ("mintcream", Colour::rgb(245, 255, 250)),
    ("mistyrose", Colour::rgb(255, 228, 225)),
    ("moccasin", Colour::rgb(255, 228, 181)),
    ("navajowhite", Colour::rgb(255, 222, 173)),
    ("navy", Colour::rgb(0, 0, 128)),
    ("oldlace", Colour::rgb(253, 245, 230)),
    ("olive", Colour::rgb(128, 128, 0)),
    ("olivedrab", Colour::rgb(107, 142, 35)),
    ("orange", Colour::rgb(255, 165, 0)),
    ("orangered", Colour::rgb(255, 69, 0)),
    ("orchid", Colour::rgb(218, 112, 214)),
    ("palegoldenrod", Colour::rgb(238, 232, 170)),
    ("palegreen", Colour::rgb(152, 251, 152)),
    ("paleturquoise", Colour::rgb(175, 238, 238)),
    ("palevioletred", Colour::rgb(219, 112, 147)),
    ("papayawhip", Colour::rgb(255, 239, 213)),
    ("peachpuff", Colour::rgb(255, 218, 185)),
    ("peru", Colour::rgb(205, 133, 63)),
    ("pink", Colour::rgb(255, 192, 203)),
    ("plum", Colour::rgb(221, 160, 221)),
    ("powderblue", Colour::rgb(176, 224, 230)),
    ("purple", Colour::rgb(128, 0, 128)),
    ("rebeccapurple", Colour::rgb(102, 51, 153)),
    ("red", Colour::rgb(255, 0, 0)),
    ("rosybrown", Colour::rgb(188, 143, 143)),
    ("royalblue", Colour::rgb(65, 105, 225)),
    ("saddlebrown", Colour::rgb(139, 69, 19)),
    ("salmon", Colour::rgb(250, 128, 114)),
    ("sandybrown", Colour::rgb(244, 164, 96)),
    ("seagreen", Colour::rgb(46, 139, 87)),
    ("seashell", Colour::rgb(255, 245, 238)),
    ("sienna", Colour::rgb(160, 82, 45)),
    ("silver", Colour::rgb(192, 192, 192)),
    ("skyblue", Colour::rgb(135, 206, 235)),
    ("slateblue", Colour::rgb(106, 90, 205)),
    ("slategray", Colour::rgb(112, 128, 144)),
    ("slategrey", Colour::rgb(112, 128, 144)),
    ("snow", Colour::rgb(255, 250, 250)),
    ("springgreen", Colour::rgb(0, 255, 127)),
    ("steelblue", Colour::rgb(70, 130, 180)),
    ("tan", Colour::rgb(210, 180, 140)),
    ("teal", Colour::rgb(0, 128, 128)),
    ("thistle", Colour::rgb(216, 191, 216)),
    ("tomato", Colour::rgb(255, 99, 71)),
    ("transparent", Colour::rgba(0, 0, 0, 0)),
    ("turquoise", Colour::rgb(64, 224, 208)),
    ("violet", Colour::rgb(238, 130, 238)),
    ("wheat", Colour::rgb(245, 222, 179)),
    ("white", Colour::rgb(255, 255, 255)),
    ("whitesmoke", Colour::rgb(245, 245, 245)),
    ("yellow", Colour::rgb(255, 255, 0)),
    ("yellowgreen", Colour::rgb(154, 205, 50)),
];

/// X11 `rgb.txt` names.
const X11: &[(&str, Colour)] = &[
    ("alice blue", Colour::rgb(240, 248, 255)),
    ("aliceblue", Colour::rgb(240, 248, 255)),
    ("aquamarine", Colour::rgb(127, 255, 212)),
    ("black", Colour::rgb(0, 0, 0)),
    ("blue", Colour::rgb(0, 0, 255)),
    ("brown", Colour::rgb(165, 42, 42)),
    ("cadet blue", Colour::rgb(95, 158, 160)),
    ("cadetblue", Colour::rgb(95, 158, 160)),
    ("chocolate", Colour::rgb(210, 105, 30)),
    ("coral", Colour::rgb(255, 127, 80)),
    ("cyan", Colour::rgb(0, 255, 255)),
    ("dark green", Colour::rgb(0, 100, 0)),
    ("dark olive green", Colour::rgb(85, 107, 47)),
    ("dark orange", Colour::rgb(255, 140, 0)),
    ("dark slate gray", Colour::rgb(47, 79, 79)),
    ("darkgreen", Colour::rgb(0, 100, 0)),
    ("darkolivegreen", Colour::rgb(85, 107, 47)),
    ("darkorange", Colour::rgb(255, 140, 0)),
    ("darkslategray", Colour::rgb(47, 79, 79)),
    ("deep pink", Colour::rgb(255, 20, 147)),
    ("deeppink", Colour::rgb(255, 20, 147)),
    ("dim gray", Colour::rgb(105, 105, 105)),
    ("dimgray", Colour::rgb(105, 105, 105)),
    ("dodger blue", Colour::rgb(30, 144, 255)),
    ("dodgerblue", Colour::rgb(30, 144, 255)),
    ("firebrick", Colour::rgb(178, 34, 34)),
    ("forest green", Colour::rgb(34, 139, 34)),
    ("forestgreen", Colour::rgb(34, 139, 34)),
    ("ghost white", Colour::rgb(248, 248, 255)),
    ("ghostwhite", Colour::rgb(248, 248, 255)),
    ("gold", Colour::rgb(255, 215, 0)),
    ("goldenrod", Colour::rgb(218, 165, 32)),
    ("gray", Colour::rgb(190, 190, 190)),
    ("green", Colour::rgb(0, 255, 0)),
    ("grey", Colour::rgb(190, 190, 190)),
    ("hot pink", Colour::rgb(255, 105, 180)),
    ("hotpink", Colour::rgb(255, 105, 180)),
    ("indian red", Colour::rgb(205, 92, 92)),
    ("indianred", Colour::rgb(205, 92, 92)),
    ("ivory", Colour::rgb(255, 255, 240)),
    ("khaki", Colour::rgb(240, 230, 140)),
    ("lavender", Colour::rgb(230, 230, 250)),
    ("lawn green", Colour::rgb(124, 252, 0)),
    ("lawngreen", Colour::rgb(124, 252, 0)),
    ("light gray", Colour::rgb(211, 211, 211)),
    ("light green", Colour::rgb(144, 238, 144)),
    ("light slate gray", Colour::rgb(119, 136, 153)),
    ("lightgray", Colour::rgb(211, 211, 211)),
    ("lightgreen", Colour::rgb(144, 238, 144)),
    ("lightslategray", Colour::rgb(119, 136, 153)),
    ("lime green", Colour::rgb(50, 205, 50)),
    ("limegreen", Colour::rgb(50, 205, 50)),
    ("magenta", Colour::rgb(255, 0, 255)),
    ("maroon", Colour::rgb(176, 48, 96)),
    ("medium sea green", Colour::rgb(60, 179, 113)),
    ("mediumseagreen", Colour::rgb(60, 179, 113)),
    ("midnight blue", Colour::rgb(25, 25, 112)),
    ("midnightblue", Colour::rgb(25, 25, 112)),
    ("misty rose", Colour::rgb(255, 228, 225)),
    ("mistyrose", Colour::rgb(255, 228, 225)),
    ("navajo white", Colour::rgb(255, 222, 173)),
    ("navajowhite", Colour::rgb(255, 222, 173)),
    ("navy", Colour::rgb(0, 0, 128)),
    ("navy blue", Colour::rgb(0, 0, 128)),
    ("navyblue", Colour::rgb(0, 0, 128)),
    ("olive drab", Colour::rgb(107, 142, 35)),
    ("olivedrab", Colour::rgb(107, 142, 35)),
    ("orange", Colour::rgb(255, 165, 0)),
    ("orange red", Colour::rgb(255, 69, 0)),
    ("orangered", Colour::rgb(255, 69, 0)),
    ("orchid", Colour::rgb(218, 112, 214)),
    ("pale green", Colour::rgb(152, 251, 152)),
    ("palegreen", Colour::rgb(152, 251, 152)),
    ("pink", Colour::rgb(255, 192, 203)),
    ("plum", Colour::rgb(221, 160, 221)),
    ("powder blue", Colour::rgb(176, 224, 230)),
    ("powderblue", Colour::rgb(176, 224, 230)),
    ("purple", Colour::rgb(160, 32, 240)),
    ("red", Colour::rgb(255, 0, 0)),
    ("royal blue", Colour::rgb(65, 105, 225)),
    ("royalblue", Colour::rgb(65, 105, 225)),
    ("saddle brown", Colour::rgb(139, 69, 19)),
    ("saddlebrown", Colour::rgb(139, 69, 19)),
    ("salmon", Colour::rgb(250, 128, 114)),
    ("sea green", Colour::rgb(46, 139, 87)),
    ("seagreen", Colour::rgb(46, 139, 87)),
    ("sienna", Colour::rgb(160, 82, 45)),
    ("sky blue", Colour::rgb(135, 206, 235)),
    ("skyblue", Colour::rgb(135, 206, 235)),
    ("snow", Colour::rgb(255, 250, 250)),
    ("spring green", Colour::rgb(0, 255, 127)),
    ("springgreen", Colour::rgb(0, 255, 127)),
    ("steel blue", Colour::rgb(70, 130, 180)),
    ("steelblue", Colour::rgb(70, 130, 180)),
    ("tan", Colour::rgb(210, 180, 140)),
    ("tomato", Colour::rgb(255, 99, 71)),
    ("turquoise", Colour::rgb(64, 224, 208)),
    ("violet", Colour::rgb(238, 130, 238)),
    ("wheat", Colour::rgb(245, 222, 179)),
    ("white", Colour::rgb(255, 255, 255)),
    ("yellow", Colour::rgb(255, 255, 0)),
    ("yellow green", Colour::rgb(154, 205, 50)),
    ("yellowgreen", Colour::rgb(154, 205, 50)),
];

/// The 16 CGA text-mode colours.
const CGA: &[(&str, Colour)] = &[
    ("black", Colour::rgb(0, 0, 0)),
    ("blue", Colour::rgb(0, 0, 170)),
    ("brown", Colour::rgb(170, 85, 0)),
    ("cyan", Colour::rgb(0, 170, 170)),
    ("dark gray", Colour::rgb(85, 85, 85)),
    ("green", Colour::rgb(0, 170, 0)),
    ("light blue", Colour::rgb(85, 85, 255)),
    ("light cyan", Colour::rgb(85, 255, 255)),
    ("light gray", Colour::rgb(170, 170, 170)),
    ("light green", Colour::rgb(85, 255, 85)),
    ("light magenta", Colour::rgb(255, 85, 255)),
    ("light red", Colour::rgb(255, 85, 85)),
    ("magenta", Colour::rgb(170, 0, 170)),
    ("red", Colour::rgb(170, 0, 0)),
    ("white", Colour::rgb(255, 255, 255)),
    ("yellow", Colour::rgb(255, 255, 85)),
];

/// A selection of Crayola crayon colours.
const CRAYOLA: &[(&str, Colour)] = &[
    ("almond", Colour::rgb(239, 222, 205)),
    ("antique brass", Colour::rgb(205, 149, 117)),
    ("apricot", Colour::rgb(253, 217, 181)),
    ("aquamarine", Colour::rgb(120, 219, 226)),
    ("banana mania", Colour::rgb(250, 231, 181)),
    ("bittersweet", Colour::rgb(253, 124, 110)),
    ("blue", Colour::rgb(31, 117, 254)),
    ("burnt orange", Colour::rgb(255, 127, 73)),
    ("burnt sienna", Colour::rgb(234, 126, 93)),
    ("cerulean", Colour::rgb(29, 172, 214)),
    ("dandelion", Colour::rgb(253, 219, 109)),
    ("forest green", Colour::rgb(109, 174, 129)),
    ("goldenrod", Colour::rgb(252, 217, 117)),
    ("granny smith apple", Colour::rgb(168, 228, 160)),
    ("jungle green", Colour::rgb(59, 176, 143)),
    ("macaroni and cheese", Colour::rgb(255, 189, 136)),
    ("mahogany", Colour::rgb(205, 74, 76)),
    ("periwinkle", Colour::rgb(197, 208, 230)),
    ("razzmatazz", Colour::rgb(227, 37, 107)),
    ("robin's egg blue", Colour::rgb(31, 206, 203)),
    ("screamin' green", Colour::rgb(118, 255, 122)),
    ("tickle me pink", Colour::rgb(252, 137, 172)),
    ("timberwolf", Colour::rgb(219, 215, 210)),
    ("wild watermelon", Colour::rgb(252, 108, 133)),
];

/// A selection of Pantone colours.
const PANTONE: &[(&str, Colour)] = &[
    ("black olive", Colour::rgb(59, 60, 54)),
    ("blue iris", Colour::rgb(91, 94, 166)),
    ("classic blue", Colour::rgb(15, 76, 129)),
    ("emerald", Colour::rgb(0, 148, 115)),
    ("greenery", Colour::rgb(136, 176, 75)),
    ("honeysuckle", Colour::rgb(214, 80, 118)),
    ("illuminating", Colour::rgb(245, 223, 77)),
    ("living coral", Colour::rgb(255, 111, 97)),
    ("marsala", Colour::rgb(150, 79, 76)),
    ("mimosa", Colour::rgb(239, 192, 80)),
    ("peach fuzz", Colour::rgb(255, 190, 152)),
    ("radiant orchid", Colour::rgb(181, 101, 167)),
    ("rose quartz", Colour::rgb(247, 202, 201)),
    ("serenity", Colour::rgb(146, 168, 209)),
    ("tangerine tango", Colour::rgb(221, 65, 36)),
    ("turquoise", Colour::rgb(69, 181, 170)),
    ("ultimate gray", Colour::rgb(147, 149, 151)),
    ("ultra violet", Colour::rgb(95, 75, 139)),
    ("very peri", Colour::rgb(102, 103, 171)),
    ("viva magenta", Colour::rgb(187, 38, 73)),
];

/// A selection of Farrow & Ball paint colours.
const FARROW_AND_BALL: &[(&str, Colour)] = &[
    ("arsenic", Colour::rgb(64, 160, 136)),
    ("babouche", Colour::rgb(231, 196, 95)),
    ("breakfast room green", Colour::rgb(132, 155, 108)),
    ("card room green", Colour::rgb(127, 131, 107)),
    ("charlotte's locks", Colour::rgb(209, 93, 52)),
    ("dead salmon", Colour::rgb(170, 131, 116)),
    ("down pipe", Colour::rgb(95, 98, 98)),
    ("elephant's breath", Colour::rgb(205, 194, 180)),
    ("hague blue", Colour::rgb(49, 66, 79)),
    ("inchyra blue", Colour::rgb(83, 99, 101)),
    ("lamp room gray", Colour::rgb(178, 176, 168)),
    ("mole's breath", Colour::rgb(142, 135, 126)),
    ("old white", Colour::rgb(220, 215, 196)),
    ("pigeon", Colour::rgb(151, 158, 148)),
    ("pointing", Colour::rgb(240, 235, 224)),
    ("railings", Colour::rgb(63, 66, 71)),
    ("setting plaster", Colour::rgb(222, 186, 170)),
    ("skimming stone", Colour::rgb(214, 206, 196)),
    ("stiffkey blue", Colour::rgb(65, 82, 107)),
    ("studio green", Colour::rgb(66, 73, 66)),
    ("sulking room pink", Colour::rgb(173, 138, 134)),
];

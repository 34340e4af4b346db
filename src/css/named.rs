// CSS Color Module Level 4 named colors.

use std::collections::HashMap;
use lazy_static::lazy_static;
use rgb::RGB8;

lazy_static! {
  pub(crate) static ref NAMED_COLORS: HashMap<&'static str, RGB8> = {
    HashMap::from([
      ("aliceblue", RGB8 { r: 240, g: 248, b: 255 }),
      ("antiquewhite", RGB8 { r: 250, g: 235, b: 215 }),
      ("aqua", RGB8 { r:   0, g: 255, b: 255 }),
      ("aquamarine", RGB8 { r: 127, g: 255, b: 212 }),
      ("azure", RGB8 { r: 240, g: 255, b: 255 }),
      ("beige", RGB8 { r: 245, g: 245, b: 220 }),
      ("bisque", RGB8 { r: 255, g: 228, b: 196 }),
      ("black", RGB8 { r:   0, g:   0, b:   0 }),
      ("blanchedalmond", RGB8 { r: 255, g: 235, b: 205 }),
      ("blue", RGB8 { r:   0, g:   0, b: 255 }),
      ("blueviolet", RGB8 { r: 138, g:  43, b: 226 }),
      ("brown", RGB8 { r: 165, g:  42, b:  42 }),
      ("burlywood", RGB8 { r: 222, g: 184, b: 135 }),
      ("cadetblue", RGB8 { r:  95, g: 158, b: 160 }),
      ("chartreuse", RGB8 { r: 127, g: 255, b:   0 }),
      ("chocolate", RGB8 { r: 210, g: 105, b:  30 }),
      ("coral", RGB8 { r: 255, g: 127, b:  80 }),
      ("cornflowerblue", RGB8 { r: 100, g: 149, b: 237 }),
      ("cornsilk", RGB8 { r: 255, g: 248, b: 220 }),
      ("crimson", RGB8 { r: 220, g:  20, b:  60 }),
      ("cyan", RGB8 { r:   0, g: 255, b: 255 }),
      ("darkblue", RGB8 { r:   0, g:   0, b: 139 }),
      ("darkcyan", RGB8 { r:   0, g: 139, b: 139 }),
      ("darkgoldenrod", RGB8 { r: 184, g: 134, b:  11 }),
      ("darkgray", RGB8 { r: 169, g: 169, b: 169 }),
      ("darkgreen", RGB8 { r:   0, g: 100, b:   0 }),
      ("darkgrey", RGB8 { r: 169, g: 169, b: 169 }),
      ("darkkhaki", RGB8 { r: 189, g: 183, b: 107 }),
      ("darkmagenta", RGB8 { r: 139, g:   0, b: 139 }),
      ("darkolivegreen", RGB8 { r:  85, g: 107, b:  47 }),
      ("darkorange", RGB8 { r: 255, g: 140, b:   0 }),
      ("darkorchid", RGB8 { r: 153, g:  50, b: 204 }),
      ("darkred", RGB8 { r: 139, g:   0, b:   0 }),
      ("darksalmon", RGB8 { r: 233, g: 150, b: 122 }),
      ("darkseagreen", RGB8 { r: 143, g: 188, b: 143 }),
      ("darkslateblue", RGB8 { r:  72, g:  61, b: 139 }),
      ("darkslategray", RGB8 { r:  47, g:  79, b:  79 }),
      ("darkslategrey", RGB8 { r:  47, g:  79, b:  79 }),
      ("darkturquoise", RGB8 { r:   0, g: 206, b: 209 }),
      ("darkviolet", RGB8 { r: 148, g:   0, b: 211 }),
      ("deeppink", RGB8 { r: 255, g:  20, b: 147 }),
      ("deepskyblue", RGB8 { r:   0, g: 191, b: 255 }),
      ("dimgray", RGB8 { r: 105, g: 105, b: 105 }),
      ("dimgrey", RGB8 { r: 105, g: 105, b: 105 }),
      ("dodgerblue", RGB8 { r:  30, g: 144, b: 255 }),
      ("firebrick", RGB8 { r: 178, g:  34, b:  34 }),
      ("floralwhite", RGB8 { r: 255, g: 250, b: 240 }),
      ("forestgreen", RGB8 { r:  34, g: 139, b:  34 }),
      ("fuchsia", RGB8 { r: 255, g:   0, b: 255 }),
      ("gainsboro", RGB8 { r: 220, g: 220, b: 220 }),
      ("ghostwhite", RGB8 { r: 248, g: 248, b: 255 }),
      ("gold", RGB8 { r: 255, g: 215, b:   0 }),
      ("goldenrod", RGB8 { r: 218, g: 165, b:  32 }),
      ("gray", RGB8 { r: 128, g: 128, b: 128 }),
      ("green", RGB8 { r:   0, g: 128, b:   0 }),
      ("greenyellow", RGB8 { r: 173, g: 255, b:  47 }),
      ("grey", RGB8 { r: 128, g: 128, b: 128 }),
      ("honeydew", RGB8 { r: 240, g: 255, b: 240 }),
      ("hotpink", RGB8 { r: 255, g: 105, b: 180 }),
      ("indianred", RGB8 { r: 205, g:  92, b:  92 }),
      ("indigo", RGB8 { r:  75, g:   0, b: 130 }),
      ("ivory", RGB8 { r: 255, g: 255, b: 240 }),
      ("khaki", RGB8 { r: 240, g: 230, b: 140 }),
      ("lavender", RGB8 { r: 230, g: 230, b: 250 }),
      ("lavenderblush", RGB8 { r: 255, g: 240, b: 245 }),
      ("lawngreen", RGB8 { r: 124, g: 252, b:   0 }),
      ("lemonchiffon", RGB8 { r: 255, g: 250, b: 205 }),
      ("lightblue", RGB8 { r: 173, g: 216, b: 230 }),
      ("lightcoral", RGB8 { r: 240, g: 128, b: 128 }),
      ("lightcyan", RGB8 { r: 224, g: 255, b: 255 }),
      ("lightgoldenrodyellow", RGB8 { r: 250, g: 250, b: 210 }),
      ("lightgray", RGB8 { r: 211, g: 211, b: 211 }),
      ("lightgreen", RGB8 { r: 144, g: 238, b: 144 }),
      ("lightgrey", RGB8 { r: 211, g: 211, b: 211 }),
      ("lightpink", RGB8 { r: 255, g: 182, b: 193 }),
      ("lightsalmon", RGB8 { r: 255, g: 160, b: 122 }),
      ("lightseagreen", RGB8 { r:  32, g: 178, b: 170 }),
      ("lightskyblue", RGB8 { r: 135, g: 206, b: 250 }),
      ("lightslategray", RGB8 { r: 119, g: 136, b: 153 }),
      ("lightslategrey", RGB8 { r: 119, g: 136, b: 153 }),
      ("lightsteelblue", RGB8 { r: 176, g: 196, b: 222 }),
      ("lightyellow", RGB8 { r: 255, g: 255, b: 224 }),
      ("lime", RGB8 { r:   0, g: 255, b:   0 }),
      ("limegreen", RGB8 { r:  50, g: 205, b:  50 }),
      ("linen", RGB8 { r: 250, g: 240, b: 230 }),
      ("magenta", RGB8 { r: 255, g:   0, b: 255 }),
      ("maroon", RGB8 { r: 128, g:   0, b:   0 }),
      ("mediumaquamarine", RGB8 { r: 102, g: 205, b: 170 }),
      ("mediumblue", RGB8 { r:   0, g:   0, b: 205 }),
      ("mediumorchid", RGB8 { r: 186, g:  85, b: 211 }),
      ("mediumpurple", RGB8 { r: 147, g: 112, b: 219 }),
      ("mediumseagreen", RGB8 { r:  60, g: 179, b: 113 }),
      ("mediumslateblue", RGB8 { r: 123, g: 104, b: 238 }),
      ("mediumspringgreen", RGB8 { r:   0, g: 250, b: 154 }),
      ("mediumturquoise", RGB8 { r:  72, g: 209, b: 204 }),
      ("mediumvioletred", RGB8 { r: 199, g:  21, b: 133 }),
      ("midnightblue", RGB8 { r:  25, g:  25, b: 112 }),
      ("mintcream", RGB8 { r: 245, g: 255, b: 250 }),
      ("mistyrose", RGB8 { r: 255, g: 228, b: 225 }),
      ("moccasin", RGB8 { r: 255, g: 228, b: 181 }),
      ("navajowhite", RGB8 { r: 255, g: 222, b: 173 }),
      ("navy", RGB8 { r:   0, g:   0, b: 128 }),
      ("oldlace", RGB8 { r: 253, g: 245, b: 230 }),
      ("olive", RGB8 { r: 128, g: 128, b:   0 }),
      ("olivedrab", RGB8 { r: 107, g: 142, b:  35 }),
      ("orange", RGB8 { r: 255, g: 165, b:   0 }),
      ("orangered", RGB8 { r: 255, g:  69, b:   0 }),
      ("orchid", RGB8 { r: 218, g: 112, b: 214 }),
      ("palegoldenrod", RGB8 { r: 238, g: 232, b: 170 }),
      ("palegreen", RGB8 { r: 152, g: 251, b: 152 }),
      ("paleturquoise", RGB8 { r: 175, g: 238, b: 238 }),
      ("palevioletred", RGB8 { r: 219, g: 112, b: 147 }),
      ("papayawhip", RGB8 { r: 255, g: 239, b: 213 }),
      ("peachpuff", RGB8 { r: 255, g: 218, b: 185 }),
      ("peru", RGB8 { r: 205, g: 133, b:  63 }),
      ("pink", RGB8 { r: 255, g: 192, b: 203 }),
      ("plum", RGB8 { r: 221, g: 160, b: 221 }),
      ("powderblue", RGB8 { r: 176, g: 224, b: 230 }),
      ("purple", RGB8 { r: 128, g:   0, b: 128 }),
      ("rebeccapurple", RGB8 { r: 102, g:  51, b: 153 }),
      ("red", RGB8 { r: 255, g:   0, b:   0 }),
      ("rosybrown", RGB8 { r: 188, g: 143, b: 143 }),
      ("royalblue", RGB8 { r:  65, g: 105, b: 225 }),
      ("saddlebrown", RGB8 { r: 139, g:  69, b:  19 }),
      ("salmon", RGB8 { r: 250, g: 128, b: 114 }),
      ("sandybrown", RGB8 { r: 244, g: 164, b:  96 }),
      ("seagreen", RGB8 { r:  46, g: 139, b:  87 }),
      ("seashell", RGB8 { r: 255, g: 245, b: 238 }),
      ("sienna", RGB8 { r: 160, g:  82, b:  45 }),
      ("silver", RGB8 { r: 192, g: 192, b: 192 }),
      ("skyblue", RGB8 { r: 135, g: 206, b: 235 }),
      ("slateblue", RGB8 { r: 106, g:  90, b: 205 }),
      ("slategray", RGB8 { r: 112, g: 128, b: 144 }),
      ("slategrey", RGB8 { r: 112, g: 128, b: 144 }),
      ("snow", RGB8 { r: 255, g: 250, b: 250 }),
      ("springgreen", RGB8 { r:   0, g: 255, b: 127 }),
      ("steelblue", RGB8 { r:  70, g: 130, b: 180 }),
      ("tan", RGB8 { r: 210, g: 180, b: 140 }),
      ("teal", RGB8 { r:   0, g: 128, b: 128 }),
      ("thistle", RGB8 { r: 216, g: 191, b: 216 }),
      ("tomato", RGB8 { r: 255, g:  99, b:  71 }),
      ("turquoise", RGB8 { r:  64, g: 224, b: 208 }),
      ("violet", RGB8 { r: 238, g: 130, b: 238 }),
      ("wheat", RGB8 { r: 245, g: 222, b: 179 }),
      ("white", RGB8 { r: 255, g: 255, b: 255 }),
      ("whitesmoke", RGB8 { r: 245, g: 245, b: 245 }),
      ("yellow", RGB8 { r: 255, g: 255, b:   0 }),
      ("yellowgreen", RGB8 { r: 154, g: 205, b:  50 }),
    ])
  };
}

//! C source rendering of an encoded image.
//!
//! The layout follows what Z88DK/SP1 projects include directly: a header
//! comment, the optional print string, pair table and tile map arrays, and
//! the tile data with its `_BASE`/`_LEN` defines.

use sp1_tiles::{EncodedImage, MatrixEntry};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bytes per line in generated arrays.
const PER_LINE: usize = 8;

/// Which artifacts to render and how to name them.
#[derive(Debug, Clone)]
pub struct SourceOptions<'a> {
    /// Identifier prefix for the arrays and defines
    pub id: &'a str,
    /// Image name shown in the header comment
    pub image_name: &'a str,
    pub print_string: bool,
    pub array: bool,
    pub map: bool,
}

/// Render the full C source for an encoded image.
///
/// `tile_data` is the tile buffer as it should be written, which differs
/// from [`EncodedImage::tiles()`] when an external compressor ran.
pub fn render_c_source(encoded: &EncodedImage, tile_data: &[u8], opts: &SourceOptions) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n/* png2sp1 {VERSION}\n *\n * {} ({}x{})\n * {} x {} ({} unique) - {} bytes\n *\n * base: {}\n */\n\n",
        opts.image_name,
        encoded.width(),
        encoded.height(),
        encoded.columns(),
        encoded.rows(),
        encoded.tile_count(),
        tile_data.len(),
        encoded.base(),
    ));

    if opts.print_string {
        push_limit_comment(&mut out, encoded.limit());
        out.push_str(&format!(
            "const uchar p{}[] = {{\n{}\n}};\n\n",
            opts.id,
            hex_lines(encoded.print_stream().iter().map(|&b| b as usize))
        ));
    }

    if opts.array {
        push_limit_comment(&mut out, encoded.limit());
        out.push_str(&format!(
            "const struct sp1_tp {}_tbl[] = {{\n{}\n}};\n\n",
            opts.id,
            pair_lines(encoded.matrix_table())
        ));
    }

    if opts.map {
        out.push_str(&format!("/* {} bytes */\n", encoded.matrix_map().len()));
        out.push_str(&format!(
            "const uchar {}_m[] = {{\n{}\n}};\n\n",
            opts.id,
            hex_lines(encoded.matrix_map().iter().copied())
        ));
    }

    let upper = opts.id.to_uppercase();
    out.push_str(&format!(
        "#define {upper}_BASE {}\n#define {upper}_LEN {}\nconst uchar {}[] = {{\n{}\n}};\n",
        encoded.base(),
        encoded.tile_count(),
        opts.id,
        hex_lines(tile_data.iter().map(|&b| b as usize)),
    ));

    out
}

fn push_limit_comment(out: &mut String, limit: usize) {
    if limit > 0 {
        out.push_str(&format!("/* limited to {limit} chars */\n"));
    }
}

/// Format values as `0x%02x`, eight per line.
pub fn hex_lines(values: impl IntoIterator<Item = usize>) -> String {
    let items: Vec<String> = values.into_iter().map(|v| format!("0x{v:02x}")).collect();
    join_lines(&items)
}

fn pair_lines(entries: &[MatrixEntry]) -> String {
    let items: Vec<String> = entries
        .iter()
        .map(|e| format!("{{ 0x{:02x}, 0x{:02x} }}", e.attr, e.tile))
        .collect();
    join_lines(&items)
}

fn join_lines(items: &[String]) -> String {
    items
        .chunks(PER_LINE)
        .map(|line| line.join(", "))
        .collect::<Vec<_>>()
        .join(",\n")
}

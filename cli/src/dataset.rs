//! The embedded water-quality dataset and output naming.
//!
//! The measurement block is carried verbatim, variant spellings included
//! (`未超標` on one row, `未超标` elsewhere).

/// Source measurements: one header record plus five data records.
/// Columns are section name, record type, twelve measurement fields.
pub const CSV_TEXT: &str = "\
断面名称,项目类型,酸碱度 PH,溶解氧 DO (mg/L),生物需氧量 BOD5 (mg/L),化学需氧量 COD (mg/L),六价铬 Cr+6 (mg/L),氨氮 NH3-N (mg/L),高锰酸盐指数 (mg/L),色度,悬浮物 SS (mg/L),浊度,其它,正磷酸盐 (mg/L)
复兴大桥点1,浓度/(mg/L),6.12,8.9,8.38,17.6,0.061,0.46,3.6981,1,35,9.38,0.090,0.01175
复兴大桥点1,超标倍数,未超标,未超标,1.095,未超标,0.22,未超标,未超标,未超标,/,/,未超标,未超标
复兴大桥点2,浓度/(mg/L),7.20,8.3,3.1825,35.2,0.073,待确认,4.4485,1.5,12,15.38,0.073,0.01318
复兴大桥点2,超标倍数,未超标,未超标,未超標,0.76,0.46,未超标,未超标,未超标,/,/,未超标,未超标
标准值,,6-9,>=5,<=4,<=20,<=0.05,<=1,<=6,<=15,无,无,<=10,<=0.2
";

/// Title of the generated document.
pub const DOCUMENT_TITLE: &str = "水质表";

/// File name of the generated Word document.
pub const DOCUMENT_FILE: &str = "水质表.docx";

/// File name of the base64 copy of the document bytes.
pub const ENCODED_FILE: &str = "水质表.docx.b64";

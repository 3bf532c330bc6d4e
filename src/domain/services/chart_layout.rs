//! # Chart Layout Engine
//!
//! 日付順の体重サンプルを折れ線グラフの描画記述に変換する純粋関数
//!
//! 出力は絶対座標で配置された線・テキスト・折れ線・円マーカーのみで構成され、
//! SVG・Canvas などどのレンダラーでも追加のレイアウト判断なしに描画できる。

use log::warn;

use crate::domain::entities::calendar_date::CalendarDate;
use crate::domain::entities::record::Record;

/// グラフ描画に必要な最小サンプル数
pub const MIN_POINTS: usize = 2;
/// 縦軸の上下に加える余白（値域に対する比率）
pub const RANGE_PADDING_RATIO: f64 = 0.2;
/// 縦軸の目盛りの上限（これを超える値域では1単位ごとではなく間引く）
pub const MAX_TICKS: usize = 50;
/// 横軸ラベルの最大数の目安
pub const MAX_DATE_LABELS: usize = 10;
/// 縦軸ラベルと軸の間隔
pub const TICK_LABEL_OFFSET: f64 = 8.0;
/// 横軸ラベルと軸の間隔
pub const DATE_LABEL_OFFSET: f64 = 15.0;
pub const MARKER_RADIUS: f64 = 4.0;

/// 描画領域の余白
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 40.0,
            left: 40.0,
        }
    }
}

/// 描画キャンバス
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartCanvas {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl ChartCanvas {
    pub fn new(width: f64, height: f64, padding: Padding) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// 余白を除いたグラフ領域の幅
    pub fn chart_width(&self) -> f64 {
        (self.width - self.padding.left - self.padding.right).max(0.0)
    }

    /// 余白を除いたグラフ領域の高さ
    pub fn chart_height(&self) -> f64 {
        (self.height - self.padding.top - self.padding.bottom).max(0.0)
    }
}

impl Default for ChartCanvas {
    fn default() -> Self {
        Self::new(600.0, 300.0, Padding::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

/// テキストの水平方向の基準位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub position: Point,
    pub text: String,
    pub anchor: TextAnchor,
    /// `position.y` をテキストの垂直方向の中心として扱う
    pub middle_baseline: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub center: Point,
    pub radius: f64,
}

/// フィルタ・並び替え後のサンプル
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSample {
    pub date: CalendarDate,
    pub weight: f64,
}

/// 描画要素（描画順に並ぶ）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawElement<'a> {
    Gridline(&'a Line),
    Label(&'a TextLabel),
    Axis(&'a Line),
    Polyline(&'a [Point]),
    Marker(&'a Marker),
}

/// 折れ線グラフの描画記述
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub canvas: ChartCanvas,
    pub samples: Vec<ChartSample>,
    pub y_min: f64,
    pub y_max: f64,
    pub gridlines: Vec<Line>,
    pub tick_labels: Vec<TextLabel>,
    pub date_labels: Vec<TextLabel>,
    pub y_axis: Line,
    pub x_axis: Line,
    pub polyline: Vec<Point>,
    pub markers: Vec<Marker>,
}

impl ChartLayout {
    /// 全要素を描画順（背景のグリッド → ラベル → 軸 → 折れ線 → マーカー）で返す
    pub fn elements(&self) -> Vec<DrawElement<'_>> {
        let mut elements = Vec::with_capacity(
            self.gridlines.len()
                + self.tick_labels.len()
                + self.date_labels.len()
                + self.markers.len()
                + 3,
        );

        elements.extend(self.gridlines.iter().map(DrawElement::Gridline));
        elements.extend(self.tick_labels.iter().map(DrawElement::Label));
        elements.extend(self.date_labels.iter().map(DrawElement::Label));
        elements.push(DrawElement::Axis(&self.y_axis));
        elements.push(DrawElement::Axis(&self.x_axis));
        elements.push(DrawElement::Polyline(&self.polyline));
        elements.extend(self.markers.iter().map(DrawElement::Marker));

        elements
    }
}

/// レイアウト結果
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    /// 有効なサンプルが2件未満（呼び出し側はプレースホルダーを表示する）
    InsufficientData,
    Chart(ChartLayout),
}

/// グラフレイアウトエンジン
///
/// 状態を持たず、呼び出しのたびに全体を再計算する
pub struct ChartLayoutEngine;

impl ChartLayoutEngine {
    /// 記録からグラフのレイアウトを計算する
    ///
    /// # Arguments
    ///
    /// * `records` - 記録（順序は問わない）
    /// * `canvas` - 描画キャンバス
    ///
    /// # Returns
    ///
    /// 体重を数値として解釈できる記録が2件未満の場合は `InsufficientData`
    pub fn layout(records: &[Record], canvas: &ChartCanvas) -> ChartOutcome {
        let samples = Self::samples(records);
        if samples.len() < MIN_POINTS {
            return ChartOutcome::InsufficientData;
        }

        let (y_min, y_max) = Self::vertical_bounds(&samples);
        let scale = Scale {
            canvas: *canvas,
            count: samples.len(),
            y_min,
            y_max,
        };

        let left = canvas.padding.left;
        let top = canvas.padding.top;
        let right = left + canvas.chart_width();
        let bottom = top + canvas.chart_height();

        // 1単位ごとに目盛りを置く（MAX_TICKS を超える場合のみ間引く）
        let (tick_step, count) = tick_spacing(y_min, y_max);
        if tick_step > 1.0 {
            warn!(
                "Weight range {}..{} is too wide for one tick per unit, using a step of {}",
                y_min, y_max, tick_step
            );
        }
        let mut gridlines = Vec::with_capacity(count);
        let mut tick_labels = Vec::with_capacity(count);
        for i in 0..count {
            let value = (y_min + i as f64 * tick_step).min(y_max);
            let y = scale.y(value);
            gridlines.push(Line {
                from: Point { x: left, y },
                to: Point { x: right, y },
            });
            tick_labels.push(TextLabel {
                position: Point {
                    x: left - TICK_LABEL_OFFSET,
                    y,
                },
                text: value.to_string(),
                anchor: TextAnchor::End,
                middle_baseline: true,
            });
        }

        let step = date_label_step(samples.len());
        let date_labels = samples
            .iter()
            .enumerate()
            .filter(|(index, _)| index % step == 0)
            .map(|(index, sample)| TextLabel {
                position: Point {
                    x: scale.x(index),
                    y: canvas.height - canvas.padding.bottom + DATE_LABEL_OFFSET,
                },
                text: sample.date.short_label(),
                anchor: TextAnchor::Middle,
                middle_baseline: false,
            })
            .collect();

        let polyline: Vec<Point> = samples
            .iter()
            .enumerate()
            .map(|(index, sample)| Point {
                x: scale.x(index),
                y: scale.y(sample.weight),
            })
            .collect();

        let markers = polyline
            .iter()
            .map(|&center| Marker {
                center,
                radius: MARKER_RADIUS,
            })
            .collect();

        ChartOutcome::Chart(ChartLayout {
            canvas: *canvas,
            samples,
            y_min,
            y_max,
            gridlines,
            tick_labels,
            date_labels,
            y_axis: Line {
                from: Point { x: left, y: top },
                to: Point { x: left, y: bottom },
            },
            x_axis: Line {
                from: Point { x: left, y: bottom },
                to: Point { x: right, y: bottom },
            },
            polyline,
            markers,
        })
    }

    /// 体重を解釈できる記録だけを日付の昇順に並べる（同じ日付は入力順を維持）
    fn samples(records: &[Record]) -> Vec<ChartSample> {
        let mut samples: Vec<ChartSample> = records
            .iter()
            .filter_map(|r| {
                r.weight_value().map(|weight| ChartSample {
                    date: r.date.clone(),
                    weight,
                })
            })
            .collect();
        samples.sort_by(|a, b| a.date.cmp(&b.date));
        samples
    }

    /// 縦軸の範囲（整数に丸め、最低1単位の幅を確保）
    fn vertical_bounds(samples: &[ChartSample]) -> (f64, f64) {
        let min = samples
            .iter()
            .map(|s| s.weight)
            .fold(f64::INFINITY, f64::min);
        let max = samples
            .iter()
            .map(|s| s.weight)
            .fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;

        let y_min = (min - range * RANGE_PADDING_RATIO).floor().max(0.0);
        // f64::MAX 付近の体重で上端が無限大にならないようにする
        let mut y_max = (max + range * RANGE_PADDING_RATIO).ceil().min(f64::MAX);
        if y_max <= y_min {
            y_max = y_min + 1.0;
        }

        (y_min, y_max)
    }
}

/// 縦軸の目盛りの間隔と本数
///
/// `[y_min, y_max]` の整数ごとに置き、本数が `MAX_TICKS` を超える場合は
/// `ceil(span / (MAX_TICKS - 1))` 単位ごとに間引く
pub fn tick_spacing(y_min: f64, y_max: f64) -> (f64, usize) {
    let span = y_max - y_min;
    let step = if span + 1.0 <= MAX_TICKS as f64 {
        1.0
    } else {
        (span / (MAX_TICKS - 1) as f64).ceil()
    };
    let count = ((span / step).floor() as usize + 1).min(MAX_TICKS);
    (step, count)
}

/// 横軸ラベルの間隔
///
/// 10点以下なら全点、それを超える場合は `ceil(n / 10)` 点ごと
pub fn date_label_step(count: usize) -> usize {
    if count <= MAX_DATE_LABELS {
        1
    } else {
        count.div_ceil(MAX_DATE_LABELS)
    }
}

struct Scale {
    canvas: ChartCanvas,
    count: usize,
    y_min: f64,
    y_max: f64,
}

impl Scale {
    /// インデックス基準の等間隔配置（日付の間隔には比例しない）
    fn x(&self, index: usize) -> f64 {
        let span = (self.count - 1) as f64;
        self.canvas.padding.left + (index as f64 / span) * self.canvas.chart_width()
    }

    /// 大きい値ほど上（yが小さい）になる
    fn y(&self, weight: f64) -> f64 {
        let chart_height = self.canvas.chart_height();
        self.canvas.padding.top + chart_height
            - ((weight - self.y_min) / (self.y_max - self.y_min)) * chart_height
    }
}

//! Console table rendering of evaluation results.

use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};

#[derive(Debug, Default)]
pub struct Summary {
    pub criteria: String,
    pub pool_size: usize,
    pub draw_count: usize,
    pub combinations: usize,
    pub derived: Option<f64>,
    pub simulated: Option<(f64, u64)>,
}

pub fn tabulate(summary: &Summary) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(16)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(14)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["".into(), "Value".into()],
        ))
        .with_row(Row::new(
            Styles::default(),
            vec!["Criteria".into(), summary.criteria.clone().into()],
        ))
        .with_row(Row::new(
            Styles::default(),
            vec!["Pool size".into(), format!("{}", summary.pool_size).into()],
        ))
        .with_row(Row::new(
            Styles::default(),
            vec![
                "Draw count".into(),
                format!("{}", summary.draw_count).into(),
            ],
        ))
        .with_row(Row::new(
            Styles::default(),
            vec![
                "Combinations".into(),
                format!("{}", summary.combinations).into(),
            ],
        ));
    if let Some(derived) = summary.derived {
        table.push_row(Row::new(
            Styles::default(),
            vec!["Exact".into(), format!("{derived:.4}%").into()],
        ));
    }
    if let Some((simulated, trials)) = summary.simulated {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("Simulated ({trials} trials)").into(),
                format!("{simulated:.4}%").into(),
            ],
        ));
    }
    table
}

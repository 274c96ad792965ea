use channelscope::viewmodel::DashboardVm;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::charts::render_bubble_chart;
use crate::ui::widgets::tables::render_competitor_table;

pub fn render_competitors(app: &App, vm: &DashboardVm, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();

    #[allow(clippy::cast_possible_truncation)]
    let table_rows = (vm.competitors.len() + 3).min(usize::from(area.height)) as u16;
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(table_rows)])
        .split(area);

    if let Some(spec) = app.charts.first() {
        render_bubble_chart(spec, f, split[0]);
    }
    render_competitor_table(&vm.competitors, &palette, f, split[1]);
}

/// Comparison table widgets
/// Draws a `TableModel`: unit toggle, sortable headers, highlighted baseline
use iced::font::{self, Font};
use iced::widget::{self, button, container, scrollable, text};
use iced::{Element, Length};

use crate::table::cost::Unit;
use crate::table::model::{TableModel, TableRow};
use crate::table::sort::Column;
use crate::Message;

const CELL_PADDING: u16 = 8;

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Relative width of each column
fn portion(column: Column) -> u16 {
    match column {
        Column::Name => 4,
        Column::EthTransfer | Column::Erc20Transfer | Column::Erc20Approval => 3,
        Column::Type | Column::PrivacyLevel | Column::Speed => 2,
        Column::Ux => 1,
    }
}

/// USD / ETH / GAS buttons, the selected one highlighted
pub fn unit_toggle(selected: Unit) -> Element<'static, Message> {
    let buttons = Unit::ALL.iter().map(|&unit| {
        let style = if unit == selected {
            button::primary
        } else {
            button::secondary
        };

        Element::from(
            button(text(unit.label()).size(14))
                .on_press(Message::UnitSelected(unit))
                .padding([6, 12])
                .style(style),
        )
    });

    widget::Row::with_children(buttons).spacing(8).into()
}

/// Header row plus the scrollable body
pub fn view(model: &TableModel) -> Element<'static, Message> {
    let body = widget::Column::with_children(model.rows.iter().map(body_row)).spacing(2);

    widget::Column::with_children([
        header_row(model),
        scrollable(body).height(Length::Fill).into(),
    ])
    .spacing(4)
    .into()
}

fn header_row(model: &TableModel) -> Element<'static, Message> {
    let cells = model.headers.iter().map(|header| {
        let label = format!("{}{}", header.label, header.indicator.arrow());

        Element::from(
            button(text(label).size(12).font(BOLD))
                .on_press(Message::ColumnActivated(header.column))
                .padding(CELL_PADDING)
                .style(button::text)
                .width(Length::FillPortion(portion(header.column))),
        )
    });

    widget::Row::with_children(cells).into()
}

fn body_row(row: &TableRow) -> Element<'static, Message> {
    let cells = Column::ALL.iter().zip(&row.cells).map(|(&column, cell)| {
        let mut label = text(cell.clone()).size(14);
        if column == Column::Name {
            label = label.font(BOLD);
        }

        Element::from(
            container(label)
                .padding(CELL_PADDING)
                .width(Length::FillPortion(portion(column))),
        )
    });

    let line = widget::Row::with_children(cells);

    // Shaded baseline row
    if row.is_baseline {
        container(line)
            .style(container::rounded_box)
            .width(Length::Fill)
            .into()
    } else {
        line.into()
    }
}

//! Conversion of layout draw commands into PDF content stream operators.
//!
//! Layout works top-down (y grows towards the bottom of the page); PDF user
//! space grows upwards from the bottom-left corner. Every y coordinate is
//! flipped here and nowhere else.

use crate::page::DrawCommand;
use crate::units::Pt;
use pdf_writer::{Content, Name, Str};

/// Append the operators for `commands` to `content`. Each command saves and
/// restores the graphics state, so colours and line widths never leak from
/// one command into the next.
pub(crate) fn render_commands(content: &mut Content, commands: &[DrawCommand], page_height: Pt) {
    for command in commands {
        content.save_state();
        match command {
            DrawCommand::Text(run) => {
                if run.text.is_empty() {
                    content.restore_state();
                    continue;
                }
                let baseline = page_height - (run.y + run.style.font.ascent(run.style.size));
                run.style.colour.apply_fill(content);
                content.begin_text();
                content.set_font(
                    Name(run.style.font.resource_name().as_bytes()),
                    run.style.size.into(),
                );
                content.next_line(run.x.into(), baseline.into());
                content.show(Str(&run.style.font.encode(&run.text)));
                content.end_text();
            }
            DrawCommand::Rule {
                x1,
                x2,
                y,
                thickness,
                colour,
            } => {
                let y: f32 = (page_height - *y).into();
                colour.apply_stroke(content);
                content.set_line_width((*thickness).into());
                content.move_to((*x1).into(), y);
                content.line_to((*x2).into(), y);
                content.stroke();
            }
            DrawCommand::FillRect { rect, colour } => {
                let pdf = rect.to_pdf(page_height);
                colour.apply_fill(content);
                content.rect(pdf.x1, pdf.y1, pdf.x2 - pdf.x1, pdf.y2 - pdf.y1);
                content.fill_nonzero();
            }
            DrawCommand::Image { image, rect } => {
                let pdf = rect.to_pdf(page_height);
                content.transform([pdf.x2 - pdf.x1, 0.0, 0.0, pdf.y2 - pdf.y1, pdf.x1, pdf.y1]);
                content.x_object(Name(format!("I{}", image.index()).as_bytes()));
            }
        }
        content.restore_state();
    }
}

//! Bordered button chrome.

use yew::prelude::*;

use crate::foundation::{EMPHASIS_CLASS, FRAME_BODY_CLASS, frame_classes};

/// Render the nine-cell button frame around `body`.
///
/// The frame is a table carrying a 3x3 grid of corner, edge, and centre
/// cells; `body` lands in the centre cell inside an `em` emphasis wrapper.
/// Corner and side cells hold an empty `i` element as a styling hook; the
/// centre column's top and bottom cells stay empty.
#[must_use]
pub fn button_frame(class: &Classes, disabled: bool, body: Html) -> Html {
    html! {
        <table cellspacing="0" class={frame_classes(disabled, class)}>
            <tbody class={FRAME_BODY_CLASS}>
                <tr>
                    <td class="lbtn-tl"><i></i></td>
                    <td class="lbtn-tc"></td>
                    <td class="lbtn-tr"><i></i></td>
                </tr>
                <tr>
                    <td class="lbtn-ml"><i></i></td>
                    <td class="lbtn-mc">
                        <em class={EMPHASIS_CLASS}>{ body }</em>
                    </td>
                    <td class="lbtn-mr"><i></i></td>
                </tr>
                <tr>
                    <td class="lbtn-bl"><i></i></td>
                    <td class="lbtn-bc"></td>
                    <td class="lbtn-br"><i></i></td>
                </tr>
            </tbody>
        </table>
    }
}

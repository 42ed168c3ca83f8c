/*
 *  font/box_drawing.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Box drawing glyphs, U+2500..U+257F
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use super::Glyph;

/// Light, heavy and double box strokes, indexed from U+2500.
#[rustfmt::skip]
pub static BOX_DRAWING: [Glyph; 128] = [
    [0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00], // U+2500 (box drawings light horizontal)
    [0x00, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00], // U+2501 (box drawings heavy horizontal)
    [0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08], // U+2502 (box drawings light vertical)
    [0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18], // U+2503 (box drawings heavy vertical)
    [0x00, 0x00, 0x00, 0xDB, 0x00, 0x00, 0x00, 0x00], // U+2504 (box drawings light triple dash horizontal)
    [0x00, 0x00, 0x00, 0xDB, 0xDB, 0x00, 0x00, 0x00], // U+2505 (box drawings heavy triple dash horizontal)
    [0x08, 0x08, 0x00, 0x08, 0x08, 0x00, 0x08, 0x08], // U+2506 (box drawings light triple dash vertical)
    [0x18, 0x18, 0x00, 0x18, 0x18, 0x00, 0x18, 0x18], // U+2507 (box drawings heavy triple dash vertical)
    [0x00, 0x00, 0x00, 0x55, 0x00, 0x00, 0x00, 0x00], // U+2508 (box drawings light quadruple dash horizontal)
    [0x00, 0x00, 0x00, 0x55, 0x55, 0x00, 0x00, 0x00], // U+2509 (box drawings heavy quadruple dash horizontal)
    [0x08, 0x00, 0x08, 0x00, 0x08, 0x00, 0x08, 0x00], // U+250A (box drawings light quadruple dash vertical)
    [0x18, 0x00, 0x18, 0x00, 0x18, 0x00, 0x18, 0x00], // U+250B (box drawings heavy quadruple dash vertical)
    [0x00, 0x00, 0x00, 0xF8, 0x08, 0x08, 0x08, 0x08], // U+250C (box drawings light down and right)
    [0x00, 0x00, 0x00, 0xF8, 0xF8, 0x08, 0x08, 0x08], // U+250D (box drawings down light and right heavy)
    [0x00, 0x00, 0x00, 0xF8, 0x18, 0x18, 0x18, 0x18], // U+250E (box drawings down heavy and right light)
    [0x00, 0x00, 0x00, 0xF8, 0xF8, 0x18, 0x18, 0x18], // U+250F (box drawings heavy down and right)
    [0x00, 0x00, 0x00, 0x0F, 0x08, 0x08, 0x08, 0x08], // U+2510 (box drawings light down and left)
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x08, 0x08, 0x08], // U+2511 (box drawings down light and left heavy)
    [0x00, 0x00, 0x00, 0x1F, 0x18, 0x18, 0x18, 0x18], // U+2512 (box drawings down heavy and left light)
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x18, 0x18, 0x18], // U+2513 (box drawings heavy down and left)
    [0x08, 0x08, 0x08, 0xF8, 0x00, 0x00, 0x00, 0x00], // U+2514 (box drawings light up and right)
    [0x08, 0x08, 0x08, 0xF8, 0xF8, 0x00, 0x00, 0x00], // U+2515 (box drawings up light and right heavy)
    [0x18, 0x18, 0x18, 0xF8, 0x18, 0x00, 0x00, 0x00], // U+2516 (box drawings up heavy and right light)
    [0x18, 0x18, 0x18, 0xF8, 0xF8, 0x00, 0x00, 0x00], // U+2517 (box drawings heavy up and right)
    [0x08, 0x08, 0x08, 0x0F, 0x00, 0x00, 0x00, 0x00], // U+2518 (box drawings light up and left)
    [0x08, 0x08, 0x08, 0x1F, 0x1F, 0x00, 0x00, 0x00], // U+2519 (box drawings up light and left heavy)
    [0x18, 0x18, 0x18, 0x1F, 0x18, 0x00, 0x00, 0x00], // U+251A (box drawings up heavy and left light)
    [0x18, 0x18, 0x18, 0x1F, 0x1F, 0x00, 0x00, 0x00], // U+251B (box drawings heavy up and left)
    [0x08, 0x08, 0x08, 0xF8, 0x08, 0x08, 0x08, 0x08], // U+251C (box drawings light vertical and right)
    [0x08, 0x08, 0x08, 0xF8, 0xF8, 0x08, 0x08, 0x08], // U+251D (box drawings vertical light and right heavy)
    [0x18, 0x18, 0x18, 0xF8, 0x18, 0x08, 0x08, 0x08], // U+251E (box drawings up heavy and right down light)
    [0x08, 0x08, 0x08, 0xF8, 0x18, 0x18, 0x18, 0x18], // U+251F (box drawings down heavy and right up light)
    [0x18, 0x18, 0x18, 0xF8, 0x18, 0x18, 0x18, 0x18], // U+2520 (box drawings vertical heavy and right light)
    [0x18, 0x18, 0x18, 0xF8, 0xF8, 0x08, 0x08, 0x08], // U+2521 (box drawings down light and right up heavy)
    [0x08, 0x08, 0x08, 0xF8, 0xF8, 0x18, 0x18, 0x18], // U+2522 (box drawings up light and right down heavy)
    [0x18, 0x18, 0x18, 0xF8, 0xF8, 0x18, 0x18, 0x18], // U+2523 (box drawings heavy vertical and right)
    [0x08, 0x08, 0x08, 0x0F, 0x08, 0x08, 0x08, 0x08], // U+2524 (box drawings light vertical and left)
    [0x08, 0x08, 0x08, 0x1F, 0x1F, 0x08, 0x08, 0x08], // U+2525 (box drawings vertical light and left heavy)
    [0x18, 0x18, 0x18, 0x1F, 0x18, 0x08, 0x08, 0x08], // U+2526 (box drawings up heavy and left down light)
    [0x08, 0x08, 0x08, 0x1F, 0x18, 0x18, 0x18, 0x18], // U+2527 (box drawings down heavy and left up light)
    [0x18, 0x18, 0x18, 0x1F, 0x18, 0x18, 0x18, 0x18], // U+2528 (box drawings vertical heavy and left light)
    [0x18, 0x18, 0x18, 0x1F, 0x1F, 0x08, 0x08, 0x08], // U+2529 (box drawings down light and left up heavy)
    [0x08, 0x08, 0x08, 0x1F, 0x1F, 0x18, 0x18, 0x18], // U+252A (box drawings up light and left down heavy)
    [0x18, 0x18, 0x18, 0x1F, 0x1F, 0x18, 0x18, 0x18], // U+252B (box drawings heavy vertical and left)
    [0x00, 0x00, 0x00, 0xFF, 0x08, 0x08, 0x08, 0x08], // U+252C (box drawings light down and horizontal)
    [0x00, 0x00, 0x00, 0xFF, 0x1F, 0x08, 0x08, 0x08], // U+252D (box drawings left heavy and right down light)
    [0x00, 0x00, 0x00, 0xFF, 0xF8, 0x08, 0x08, 0x08], // U+252E (box drawings right heavy and left down light)
    [0x00, 0x00, 0x00, 0xFF, 0xFF, 0x08, 0x08, 0x08], // U+252F (box drawings down light and horizontal heavy)
    [0x00, 0x00, 0x00, 0xFF, 0x18, 0x18, 0x18, 0x18], // U+2530 (box drawings down heavy and horizontal light)
    [0x00, 0x00, 0x00, 0xFF, 0x1F, 0x18, 0x18, 0x18], // U+2531 (box drawings right light and left down heavy)
    [0x00, 0x00, 0x00, 0xFF, 0xF8, 0x18, 0x18, 0x18], // U+2532 (box drawings left light and right down heavy)
    [0x00, 0x00, 0x00, 0xFF, 0xFF, 0x18, 0x18, 0x18], // U+2533 (box drawings heavy down and horizontal)
    [0x08, 0x08, 0x08, 0xFF, 0x00, 0x00, 0x00, 0x00], // U+2534 (box drawings light up and horizontal)
    [0x08, 0x08, 0x08, 0xFF, 0x1F, 0x00, 0x00, 0x00], // U+2535 (box drawings left heavy and right up light)
    [0x08, 0x08, 0x08, 0xFF, 0xF8, 0x00, 0x00, 0x00], // U+2536 (box drawings right heavy and left up light)
    [0x08, 0x08, 0x08, 0xFF, 0xFF, 0x00, 0x00, 0x00], // U+2537 (box drawings up light and horizontal heavy)
    [0x18, 0x18, 0x18, 0xFF, 0x18, 0x00, 0x00, 0x00], // U+2538 (box drawings up heavy and horizontal light)
    [0x18, 0x18, 0x18, 0xFF, 0x1F, 0x00, 0x00, 0x00], // U+2539 (box drawings right light and left up heavy)
    [0x18, 0x18, 0x18, 0xFF, 0xF8, 0x00, 0x00, 0x00], // U+253A (box drawings left light and right up heavy)
    [0x18, 0x18, 0x18, 0xFF, 0xFF, 0x00, 0x00, 0x00], // U+253B (box drawings heavy up and horizontal)
    [0x08, 0x08, 0x08, 0xFF, 0x08, 0x08, 0x08, 0x08], // U+253C (box drawings light vertical and horizontal)
    [0x08, 0x08, 0x08, 0xFF, 0x1F, 0x08, 0x08, 0x08], // U+253D (box drawings left heavy and right vertical light)
    [0x08, 0x08, 0x08, 0xFF, 0xF8, 0x08, 0x08, 0x08], // U+253E (box drawings right heavy and left vertical light)
    [0x08, 0x08, 0x08, 0xFF, 0xFF, 0x08, 0x08, 0x08], // U+253F (box drawings vertical light and horizontal heavy)
    [0x18, 0x18, 0x18, 0xFF, 0x18, 0x08, 0x08, 0x08], // U+2540 (box drawings up heavy and down horizontal light)
    [0x08, 0x08, 0x08, 0xFF, 0x18, 0x18, 0x18, 0x18], // U+2541 (box drawings down heavy and up horizontal light)
    [0x18, 0x18, 0x18, 0xFF, 0x18, 0x18, 0x18, 0x18], // U+2542 (box drawings vertical heavy and horizontal light)
    [0x18, 0x18, 0x18, 0xFF, 0x1F, 0x08, 0x08, 0x08], // U+2543 (box drawings left up heavy and right down light)
    [0x18, 0x18, 0x18, 0xFF, 0xF8, 0x08, 0x08, 0x08], // U+2544 (box drawings right up heavy and left down light)
    [0x08, 0x08, 0x08, 0xFF, 0x1F, 0x18, 0x18, 0x18], // U+2545 (box drawings left down heavy and right up light)
    [0x08, 0x08, 0x08, 0xFF, 0xF8, 0x18, 0x18, 0x18], // U+2546 (box drawings right down heavy and left up light)
    [0x18, 0x18, 0x18, 0xFF, 0xFF, 0x08, 0x08, 0x08], // U+2547 (box drawings down light and up horizontal heavy)
    [0x08, 0x08, 0x08, 0xFF, 0xFF, 0x18, 0x18, 0x18], // U+2548 (box drawings up light and down horizontal heavy)
    [0x18, 0x18, 0x18, 0xFF, 0x1F, 0x18, 0x18, 0x18], // U+2549 (box drawings right light and left vertical heavy)
    [0x18, 0x18, 0x18, 0xFF, 0xF8, 0x18, 0x18, 0x18], // U+254A (box drawings left light and right vertical heavy)
    [0x18, 0x18, 0x18, 0xFF, 0xFF, 0x18, 0x18, 0x18], // U+254B (box drawings heavy vertical and horizontal)
    [0x00, 0x00, 0x00, 0x77, 0x00, 0x00, 0x00, 0x00], // U+254C (box drawings light double dash horizontal)
    [0x00, 0x00, 0x00, 0x77, 0x77, 0x00, 0x00, 0x00], // U+254D (box drawings heavy double dash horizontal)
    [0x08, 0x08, 0x08, 0x00, 0x08, 0x08, 0x08, 0x00], // U+254E (box drawings light double dash vertical)
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // U+254F (box drawings heavy double dash vertical)
    [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00], // U+2550 (box drawings double horizontal)
    [0x14, 0x14, 0x14, 0x14, 0x14, 0x14, 0x14, 0x14], // U+2551 (box drawings double vertical)
    [0x00, 0x00, 0xFC, 0x08, 0xFC, 0x08, 0x08, 0x08], // U+2552 (box drawings down single and right double)
    [0x00, 0x00, 0x14, 0xFC, 0x14, 0x14, 0x14, 0x14], // U+2553 (box drawings down double and right single)
    [0x00, 0x00, 0xFC, 0x14, 0xFC, 0x14, 0x14, 0x14], // U+2554 (box drawings double down and right)
    [0x00, 0x00, 0x1F, 0x08, 0x1F, 0x08, 0x08, 0x08], // U+2555 (box drawings down single and left double)
    [0x00, 0x00, 0x14, 0x1F, 0x14, 0x14, 0x14, 0x14], // U+2556 (box drawings down double and left single)
    [0x00, 0x00, 0x1F, 0x14, 0x1F, 0x14, 0x14, 0x14], // U+2557 (box drawings double down and left)
    [0x08, 0x08, 0xFC, 0x08, 0xFC, 0x00, 0x00, 0x00], // U+2558 (box drawings up single and right double)
    [0x14, 0x14, 0x14, 0xFC, 0x14, 0x00, 0x00, 0x00], // U+2559 (box drawings up double and right single)
    [0x14, 0x14, 0xFC, 0x14, 0xFC, 0x00, 0x00, 0x00], // U+255A (box drawings double up and right)
    [0x08, 0x08, 0x1F, 0x08, 0x1F, 0x00, 0x00, 0x00], // U+255B (box drawings up single and left double)
    [0x14, 0x14, 0x14, 0x1F, 0x14, 0x00, 0x00, 0x00], // U+255C (box drawings up double and left single)
    [0x14, 0x14, 0x1F, 0x14, 0x1F, 0x00, 0x00, 0x00], // U+255D (box drawings double up and left)
    [0x08, 0x08, 0xFC, 0x08, 0xFC, 0x08, 0x08, 0x08], // U+255E (box drawings vertical single and right double)
    [0x14, 0x14, 0x14, 0xFC, 0x14, 0x14, 0x14, 0x14], // U+255F (box drawings vertical double and right single)
    [0x14, 0x14, 0xFC, 0x14, 0xFC, 0x14, 0x14, 0x14], // U+2560 (box drawings double vertical and right)
    [0x08, 0x08, 0x1F, 0x08, 0x1F, 0x08, 0x08, 0x08], // U+2561 (box drawings vertical single and left double)
    [0x14, 0x14, 0x14, 0x1F, 0x14, 0x14, 0x14, 0x14], // U+2562 (box drawings vertical double and left single)
    [0x14, 0x14, 0x1F, 0x14, 0x1F, 0x14, 0x14, 0x14], // U+2563 (box drawings double vertical and left)
    [0x00, 0x00, 0xFF, 0x08, 0xFF, 0x08, 0x08, 0x08], // U+2564 (box drawings down single and horizontal double)
    [0x00, 0x00, 0x14, 0xFF, 0x14, 0x14, 0x14, 0x14], // U+2565 (box drawings down double and horizontal single)
    [0x00, 0x00, 0xFF, 0x14, 0xFF, 0x14, 0x14, 0x14], // U+2566 (box drawings double down and horizontal)
    [0x08, 0x08, 0xFF, 0x08, 0xFF, 0x00, 0x00, 0x00], // U+2567 (box drawings up single and horizontal double)
    [0x14, 0x14, 0x14, 0xFF, 0x14, 0x00, 0x00, 0x00], // U+2568 (box drawings up double and horizontal single)
    [0x14, 0x14, 0xFF, 0x14, 0xFF, 0x00, 0x00, 0x00], // U+2569 (box drawings double up and horizontal)
    [0x08, 0x08, 0xFF, 0x08, 0xFF, 0x08, 0x08, 0x08], // U+256A (box drawings vertical single and horizontal double)
    [0x14, 0x14, 0x14, 0xFF, 0x14, 0x14, 0x14, 0x14], // U+256B (box drawings vertical double and horizontal single)
    [0x14, 0x14, 0xFF, 0x14, 0xFF, 0x14, 0x14, 0x14], // U+256C (box drawings double vertical and horizontal)
    [0x00, 0x00, 0x00, 0xF0, 0x08, 0x08, 0x08, 0x08], // U+256D (box drawings light arc down and right)
    [0x00, 0x00, 0x00, 0x07, 0x08, 0x08, 0x08, 0x08], // U+256E (box drawings light arc down and left)
    [0x08, 0x08, 0x08, 0x07, 0x00, 0x00, 0x00, 0x00], // U+256F (box drawings light arc up and left)
    [0x08, 0x08, 0x08, 0xF0, 0x00, 0x00, 0x00, 0x00], // U+2570 (box drawings light arc up and right)
    [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01], // U+2571 (box drawings light diagonal upper right to lower left)
    [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80], // U+2572 (box drawings light diagonal upper left to lower right)
    [0x81, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x81], // U+2573 (box drawings light diagonal cross)
    [0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00], // U+2574 (box drawings light left)
    [0x08, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00, 0x00], // U+2575 (box drawings light up)
    [0x00, 0x00, 0x00, 0xF8, 0x00, 0x00, 0x00, 0x00], // U+2576 (box drawings light right)
    [0x00, 0x00, 0x00, 0x08, 0x08, 0x08, 0x08, 0x08], // U+2577 (box drawings light down)
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00], // U+2578 (box drawings heavy left)
    [0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00], // U+2579 (box drawings heavy up)
    [0x00, 0x00, 0x00, 0xF8, 0xF8, 0x00, 0x00, 0x00], // U+257A (box drawings heavy right)
    [0x00, 0x00, 0x00, 0x18, 0x18, 0x18, 0x18, 0x18], // U+257B (box drawings heavy down)
    [0x00, 0x00, 0x00, 0xFF, 0xF8, 0x00, 0x00, 0x00], // U+257C (box drawings light left and heavy right)
    [0x08, 0x08, 0x08, 0x18, 0x18, 0x18, 0x18, 0x18], // U+257D (box drawings light up and heavy down)
    [0x00, 0x00, 0x00, 0xFF, 0x1F, 0x00, 0x00, 0x00], // U+257E (box drawings heavy left and light right)
    [0x18, 0x18, 0x18, 0x18, 0x18, 0x08, 0x08, 0x08], // U+257F (box drawings heavy up and light down)
];

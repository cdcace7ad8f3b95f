/*!
# Introductory Tutorial for ZX BASIC

ZX BASIC runs a whole program from a text file and shows what it drew.
There is no prompt and no direct mode. Write a program with any editor:

```text
10 PAPER 1: INK 6: CLS
20 FOR I = 0 TO 255 STEP 8
30 PLOT I, 0: DRAW 255 - I, 175
40 NEXT I
```

Then run it and write the screen to an image.

<pre><code>&nbsp;$ zxbasic fan.bas --png fan.png
</code></pre>

Add `--preview` to see the screen in a colour terminal instead. Stop a
program that runs forever with CTRL-C; it halts with a `BREAK` error.

Line numbers are optional. A line needs one only when a `GOTO` or
`GOSUB` has to find it. Several statements may share a line when
separated by a colon.

When something goes wrong the program halts and the failing statement is
printed along with the columns of the offending text.

<pre><code>&nbsp;$ zxbasic broken.bas
&nbsp;SYNTAX ERROR IN "30 PLOT I 0" (10..11); MISSING OPERATOR
</code></pre>

Set `ZXBASIC_LOG=trace` to watch every statement as it executes.

*/
